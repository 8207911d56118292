use crate::errors::OffsetHelperError;
use crate::storage::{get_paths, get_pools};
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Route starting at `token`, empty when the token is not registered.
pub fn eligible_path(e: &Env, token: &Address) -> Vec<Address> {
    for (_, path) in get_paths(e).iter() {
        if path.first().as_ref() == Some(token) {
            return path;
        }
    }
    Vec::new(e)
}

pub fn is_pool_eligible(e: &Env, pool: &Address) -> bool {
    get_pools(e).values().contains(pool)
}

pub fn require_pool(e: &Env, pool: &Address) {
    if !is_pool_eligible(e, pool) {
        panic_with_error!(e, OffsetHelperError::PoolNotEligible);
    }
}

// Full router path: registered route of `from_token` followed by the pool token.
pub fn swap_path(e: &Env, from_token: &Address, pool: &Address) -> Vec<Address> {
    require_pool(e, pool);

    let mut path = eligible_path(e, from_token);
    if path.is_empty() {
        panic_with_error!(e, OffsetHelperError::PathNotEligible);
    }
    path.push_back(pool.clone());
    path
}
