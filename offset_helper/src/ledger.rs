use crate::errors::OffsetHelperError;
use crate::storage::{get_balance, set_balance};
use soroban_sdk::{panic_with_error, Address, Env};
use utils::math_errors::MathError;

pub fn credit(e: &Env, user: &Address, token: &Address, amount: u128) {
    let balance = match get_balance(e, user, token).checked_add(amount) {
        Some(value) => value,
        None => panic_with_error!(e, MathError::NumberOverflow),
    };
    set_balance(e, user, token, balance);
}

// `error` tells the caller which kind of holding was short
pub fn debit(e: &Env, user: &Address, token: &Address, amount: u128, error: OffsetHelperError) {
    let balance = get_balance(e, user, token);
    if balance < amount {
        panic_with_error!(e, error);
    }
    set_balance(e, user, token, balance - amount);
}
