#![no_std]

mod calculator;
mod carbon;
mod constants;
mod contract;
mod errors;
mod events;
mod interface;
mod ledger;
mod redeem;
mod reentrancy;
mod registry;
mod retire;
mod router;
mod storage;
mod swap;
mod test;
mod test_permissions;
mod test_reentrancy;
mod testutils;

pub use crate::contract::{OffsetHelper, OffsetHelperClient};
pub use crate::storage::HelperConfig;
