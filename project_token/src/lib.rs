#![no_std]

mod contract;
mod events;
mod interface;
mod storage;
mod test_permissions;
mod testutils;

pub use crate::contract::{ProjectToken, ProjectTokenClient};
