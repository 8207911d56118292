#![no_std]

mod constants;
mod contract;
mod errors;
mod events;
mod interface;
mod pool;
mod storage;
mod test;
mod test_permissions;
mod testutils;
mod utils;

pub use crate::contract::{SwapRouter, SwapRouterClient};
