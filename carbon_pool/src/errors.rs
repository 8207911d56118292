use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CarbonPoolError {
    ZeroAmount = 621,
    InsufficientReserves = 622,
    ProjectTokenNotAccepted = 623,
}
