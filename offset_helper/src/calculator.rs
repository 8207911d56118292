use crate::registry::swap_path;
use crate::router::SwapRouterClient;
use crate::storage::get_router;
use soroban_sdk::{Address, Env};

// Input of `from_token` needed to receive exactly `amount` pool tokens.
pub fn needed_amount(e: &Env, from_token: &Address, pool: &Address, amount: u128) -> u128 {
    let path = swap_path(e, from_token, pool);
    SwapRouterClient::new(e, &get_router(e))
        .get_amounts_in(&amount, &path)
        .get_unchecked(0)
}

// Pool tokens received for exactly `from_amount` of `from_token`.
pub fn expected_amount(e: &Env, from_token: &Address, pool: &Address, from_amount: u128) -> u128 {
    let path = swap_path(e, from_token, pool);
    let amounts = SwapRouterClient::new(e, &get_router(e)).get_amounts_out(&from_amount, &path);
    amounts.get_unchecked(amounts.len() - 1)
}
