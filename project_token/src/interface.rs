use soroban_sdk::{Address, Env, String};

pub trait ProjectTokenInterface {
    // Mint new credits, admin only
    fn mint(e: Env, to: Address, amount: i128);

    // Burn credits on behalf of the holder and record the retirement
    fn retire(e: Env, from: Address, amount: i128);

    // Amount retired by a single holder
    fn retired(e: Env, user: Address) -> i128;

    fn total_retired(e: Env) -> i128;

    fn total_supply(e: Env) -> i128;

    fn project_id(e: Env) -> String;

    fn vintage(e: Env) -> u64;
}
