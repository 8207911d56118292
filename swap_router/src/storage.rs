use crate::utils::sort;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    FeeFraction,               // Swap fee in basis points (30 = 0.3%)
    Reserves(Address, Address), // Sorted token pair
}

generate_instance_storage_getter_and_setter!(fee_fraction, DataKey::FeeFraction, u32);

// reserves in the order of the arguments
pub fn get_reserves(e: &Env, token_a: &Address, token_b: &Address) -> (u128, u128) {
    let (token_0, token_1) = sort(e, token_a, token_b);
    let key = DataKey::Reserves(token_0.clone(), token_1);
    let (reserve_0, reserve_1): (u128, u128) = match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => (0, 0),
    };
    if token_a == &token_0 {
        (reserve_0, reserve_1)
    } else {
        (reserve_1, reserve_0)
    }
}

pub fn set_reserves(e: &Env, token_a: &Address, token_b: &Address, reserve_a: u128, reserve_b: u128) {
    let (token_0, token_1) = sort(e, token_a, token_b);
    let value = if token_a == &token_0 {
        (reserve_a, reserve_b)
    } else {
        (reserve_b, reserve_a)
    };
    let key = DataKey::Reserves(token_0, token_1);
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}
