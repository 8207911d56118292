use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Map, Symbol, Vec};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

// Deployment specific addresses and routes, supplied once at construction.
#[derive(Clone)]
#[contracttype]
pub struct HelperConfig {
    pub router: Address,
    // stellar asset contract of the native coin
    pub native_token: Address,
    // e.g. BCT, NCT
    pub pools: Map<Symbol, Address>,
    // source asset symbol => route ending in the router's stable asset
    pub paths: Map<Symbol, Vec<Address>>,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Router,
    NativeToken,
    Pools,
    Paths,
    Locked,
    Balance(Address, Address), // (user, token)
}

generate_instance_storage_getter_and_setter!(router, DataKey::Router, Address);
generate_instance_storage_getter_and_setter!(native_token, DataKey::NativeToken, Address);
generate_instance_storage_getter_and_setter!(pools, DataKey::Pools, Map<Symbol, Address>);
generate_instance_storage_getter_and_setter!(paths, DataKey::Paths, Map<Symbol, Vec<Address>>);
generate_instance_storage_getter_and_setter_with_default!(locked, DataKey::Locked, bool, false);

pub fn get_balance(e: &Env, user: &Address, token: &Address) -> u128 {
    let key = DataKey::Balance(user.clone(), token.clone());
    match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => 0,
    }
}

pub fn set_balance(e: &Env, user: &Address, token: &Address, value: u128) {
    let key = DataKey::Balance(user.clone(), token.clone());
    if value == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}
