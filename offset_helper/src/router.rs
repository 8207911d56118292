use soroban_sdk::{contractclient, Address, Env, Vec};

#[allow(dead_code)]
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128>;

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128>;

    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
    ) -> Vec<u128>;

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
    ) -> Vec<u128>;
}
