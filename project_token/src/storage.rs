use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    ProjectId,
    Vintage, // unix timestamp of the vintage start
    TotalRetired,
    Retired(Address),
}

generate_instance_storage_getter_and_setter!(project_id, DataKey::ProjectId, String);
generate_instance_storage_getter_and_setter!(vintage, DataKey::Vintage, u64);
generate_instance_storage_getter_and_setter_with_default!(
    total_retired,
    DataKey::TotalRetired,
    i128,
    0
);

pub fn get_retired(e: &Env, user: &Address) -> i128 {
    let key = DataKey::Retired(user.clone());
    match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => 0,
    }
}

pub fn set_retired(e: &Env, user: &Address, value: &i128) {
    let key = DataKey::Retired(user.clone());
    e.storage().persistent().set(&key, value);
    bump_persistent(e, &key);
}
