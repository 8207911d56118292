pub(crate) const CONTRACT_VERSION: u32 = 100;
