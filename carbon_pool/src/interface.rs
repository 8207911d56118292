use crate::storage::Lot;
use soroban_sdk::{Address, Env, Vec};

pub trait CarbonPoolInterface {
    // Deposits project tokens and mints the same amount of pool tokens to `from`.
    //
    // Returns:
    //   - The amount of pool tokens minted.
    fn deposit(e: Env, from: Address, project_token: Address, amount: u128) -> u128;

    // Burns `amount` pool tokens of `from` and hands out project tokens, oldest vintage first.
    //
    // Returns:
    //   - The project tokens paid out and the amount of each, summing to `amount`.
    fn redeem_auto(e: Env, from: Address, amount: u128) -> (Vec<Address>, Vec<u128>);

    // Backing lots in redemption order.
    fn get_lots(e: Env) -> Vec<Lot>;

    fn total_supply(e: Env) -> i128;

    fn is_project_token_accepted(e: Env, project_token: Address) -> bool;
}

pub trait AdminInterface {
    // Allows deposits of `project_token`.
    fn add_project_token(e: Env, admin: Address, project_token: Address);

    // Stops new deposits of `project_token`. Lots already held stay redeemable.
    fn remove_project_token(e: Env, admin: Address, project_token: Address);
}
