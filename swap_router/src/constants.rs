// 10000 = 100%
pub(crate) const FEE_MULTIPLIER: u128 = 10_000;
pub(crate) const MAX_FEE_FRACTION: u32 = 1_000;
