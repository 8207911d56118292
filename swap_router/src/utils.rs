use crate::errors::RouterError;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn sort(e: &Env, a: &Address, b: &Address) -> (Address, Address) {
    if a < b {
        return (a.clone(), b.clone());
    } else if a > b {
        return (b.clone(), a.clone());
    }
    panic_with_error!(e, RouterError::IdenticalTokens)
}
