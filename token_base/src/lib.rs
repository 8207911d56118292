#![no_std]

pub mod allowance;
pub mod balance;
pub mod errors;
pub mod metadata;

use crate::errors::TokenError;
use soroban_sdk::{panic_with_error, Env};

pub fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeNotAllowed);
    }
}
