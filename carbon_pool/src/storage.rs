use soroban_sdk::{contracttype, Address, Env, Vec};
use utils::bump::{bump_instance, bump_persistent};

// Project tokens backing the pool, one entry per token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Lot {
    pub token: Address,
    pub vintage: u64,
    pub amount: u128,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Lots,
    Accepted(Address), // project token allowed for deposit
}

// kept sorted by vintage, oldest first
pub fn get_lots(e: &Env) -> Vec<Lot> {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::Lots)
        .unwrap_or(Vec::new(e))
}

pub fn set_lots(e: &Env, lots: &Vec<Lot>) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::Lots, lots);
}

pub fn is_accepted(e: &Env, project_token: &Address) -> bool {
    let key = DataKey::Accepted(project_token.clone());
    match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => false,
    }
}

pub fn set_accepted(e: &Env, project_token: &Address, value: bool) {
    let key = DataKey::Accepted(project_token.clone());
    if !value {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}
