#![no_std]

mod contract;
mod errors;
mod events;
mod interface;
mod lots;
mod project;
mod storage;
mod testutils;

pub use crate::contract::{CarbonPool, CarbonPoolClient};
pub use crate::storage::Lot;
