use crate::errors::CarbonPoolError;
use crate::storage::Lot;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Adds `amount` of `token` to the lots. A token already present keeps its position,
// a new one goes after every lot of the same or older vintage.
pub fn add_to_lots(lots: &mut Vec<Lot>, token: &Address, vintage: u64, amount: u128) {
    for i in 0..lots.len() {
        let mut lot = lots.get_unchecked(i);
        if &lot.token == token {
            lot.amount += amount;
            lots.set(i, lot);
            return;
        }
    }

    let mut position = lots.len();
    for i in 0..lots.len() {
        if lots.get_unchecked(i).vintage > vintage {
            position = i;
            break;
        }
    }
    lots.insert(
        position,
        Lot {
            token: token.clone(),
            vintage,
            amount,
        },
    );
}

pub fn total_reserves(lots: &Vec<Lot>) -> u128 {
    let mut total = 0;
    for lot in lots.iter() {
        total += lot.amount;
    }
    total
}

// Takes `amount` from the oldest lots first, spilling into the next lot until the
// request is covered. Emptied lots are dropped.
pub fn take_oldest_first(
    e: &Env,
    lots: &mut Vec<Lot>,
    amount: u128,
) -> (Vec<Address>, Vec<u128>) {
    if amount > total_reserves(lots) {
        panic_with_error!(e, CarbonPoolError::InsufficientReserves);
    }

    let mut tokens = Vec::new(e);
    let mut amounts = Vec::new(e);
    let mut remaining = amount;
    while remaining > 0 {
        let mut lot = match lots.first() {
            Some(lot) => lot,
            None => panic_with_error!(e, CarbonPoolError::InsufficientReserves),
        };
        let taken = if lot.amount < remaining {
            lot.amount
        } else {
            remaining
        };
        tokens.push_back(lot.token.clone());
        amounts.push_back(taken);
        remaining -= taken;

        lot.amount -= taken;
        if lot.amount == 0 {
            lots.pop_front();
        } else {
            lots.set(0, lot);
        }
    }
    (tokens, amounts)
}
