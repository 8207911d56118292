use soroban_sdk::{contractclient, Env};

// the subset of the project token contract the pool depends on
#[allow(dead_code)]
#[contractclient(name = "ProjectTokenClient")]
pub trait ProjectTokenInterface {
    fn vintage(e: Env) -> u64;
}
