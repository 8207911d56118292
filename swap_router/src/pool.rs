use crate::constants::FEE_MULTIPLIER;
use crate::errors::RouterError;
use crate::storage::{get_fee_fraction, get_reserves};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

pub fn get_amount_out(e: &Env, in_amount: u128, reserve_sell: u128, reserve_buy: u128) -> u128 {
    if in_amount == 0 {
        panic_with_error!(e, RouterError::ZeroAmount);
    }
    if reserve_sell == 0 || reserve_buy == 0 {
        panic_with_error!(e, RouterError::PairNotFound);
    }

    let fee_fraction = get_fee_fraction(e) as u128;
    let in_after_fee = in_amount * (FEE_MULTIPLIER - fee_fraction) / FEE_MULTIPLIER;
    let out_amount = in_after_fee.fixed_mul_floor(e, &reserve_buy, &(reserve_sell + in_after_fee));
    // dust input rounds down to nothing
    if out_amount == 0 {
        panic_with_error!(e, RouterError::InsufficientOutputAmount);
    }
    out_amount
}

pub fn get_amount_in(e: &Env, out_amount: u128, reserve_sell: u128, reserve_buy: u128) -> u128 {
    if out_amount == 0 {
        panic_with_error!(e, RouterError::ZeroAmount);
    }
    if reserve_sell == 0 || reserve_buy == 0 {
        panic_with_error!(e, RouterError::PairNotFound);
    }
    if out_amount >= reserve_buy {
        panic_with_error!(e, RouterError::InsufficientLiquidity);
    }

    let fee_fraction = get_fee_fraction(e) as u128;
    // dx_after_fee = ceil(x * dy / (y - dy))
    let dx_after_fee = reserve_sell.fixed_mul_ceil(e, &out_amount, &(reserve_buy - out_amount));
    // gross up for the fee taken on input
    dx_after_fee.fixed_mul_ceil(e, &FEE_MULTIPLIER, &(FEE_MULTIPLIER - fee_fraction))
}

fn validate_path(e: &Env, path: &Vec<Address>) {
    if path.len() < 2 {
        panic_with_error!(e, RouterError::InvalidPath);
    }
}

// amounts[0] = amount_in, amounts[i + 1] = output of hop i
pub fn get_amounts_out(e: &Env, amount_in: u128, path: &Vec<Address>) -> Vec<u128> {
    validate_path(e, path);

    let mut amounts = Vec::from_array(e, [amount_in]);
    let mut amount = amount_in;
    for i in 0..path.len() - 1 {
        let (reserve_in, reserve_out) =
            get_reserves(e, &path.get_unchecked(i), &path.get_unchecked(i + 1));
        amount = get_amount_out(e, amount, reserve_in, reserve_out);
        amounts.push_back(amount);
    }
    amounts
}

// amounts[last] = amount_out, walked backwards from the last hop
pub fn get_amounts_in(e: &Env, amount_out: u128, path: &Vec<Address>) -> Vec<u128> {
    validate_path(e, path);

    let mut amounts = Vec::from_array(e, [amount_out]);
    let mut amount = amount_out;
    for i in (1..path.len()).rev() {
        let (reserve_in, reserve_out) =
            get_reserves(e, &path.get_unchecked(i - 1), &path.get_unchecked(i));
        amount = get_amount_in(e, amount, reserve_in, reserve_out);
        amounts.push_front(amount);
    }
    amounts
}
