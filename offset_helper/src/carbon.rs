use soroban_sdk::{contractclient, Address, Env, Vec};

#[allow(dead_code)]
#[contractclient(name = "CarbonPoolClient")]
pub trait CarbonPoolInterface {
    fn redeem_auto(e: Env, from: Address, amount: u128) -> (Vec<Address>, Vec<u128>);
}

#[allow(dead_code)]
#[contractclient(name = "ProjectTokenClient")]
pub trait ProjectTokenInterface {
    fn retire(e: Env, from: Address, amount: i128);
}
