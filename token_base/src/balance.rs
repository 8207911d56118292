use crate::errors::TokenError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Balance(Address),
    TotalSupply,
}

fn write_balance(e: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn read_balance(e: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

pub fn receive_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    write_balance(e, addr, balance + amount);
}

pub fn spend_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    if balance < amount {
        panic_with_error!(&e, TokenError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
}

pub fn read_total_supply(e: &Env) -> i128 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn increase_total_supply(e: &Env, amount: i128) {
    let supply = read_total_supply(e);
    e.storage()
        .instance()
        .set(&DataKey::TotalSupply, &(supply + amount));
}

pub fn decrease_total_supply(e: &Env, amount: i128) {
    let supply = read_total_supply(e);
    if supply < amount {
        panic_with_error!(e, TokenError::InsufficientBalance);
    }
    e.storage()
        .instance()
        .set(&DataKey::TotalSupply, &(supply - amount));
}
