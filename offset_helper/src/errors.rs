use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OffsetHelperError {
    PathNotEligible = 701,
    PoolNotEligible = 702,
    // "Insufficient NCT/BCT balance"
    InsufficientPoolTokenBalance = 703,
    // "Insufficient TCO2 balance"
    InsufficientProjectTokenBalance = 704,
    InsufficientBalance = 705,
    ArrayLengthMismatch = 706,
    ZeroAmount = 707,
    InvalidPath = 708,
    PathNotFound = 709,
    Locked = 710,
    InsufficientNativeAmount = 711,
    RedemptionMismatch = 712,
}
