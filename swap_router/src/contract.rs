use crate::constants::MAX_FEE_FRACTION;
use crate::errors::RouterError;
use crate::events::{Events, RouterEvents};
use crate::interface::{AdminInterface, RouterInterface};
use crate::pool;
use crate::storage::{get_fee_fraction, get_reserves, set_fee_fraction, set_reserves};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_admin;
use soroban_sdk::token::Client as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

#[contract]
pub struct SwapRouter;

fn check_fee_fraction(e: &Env, fee_fraction: u32) {
    if fee_fraction > MAX_FEE_FRACTION {
        panic_with_error!(e, RouterError::FeeFractionTooHigh);
    }
}

// moves reserves along the path once `amounts` are settled
fn apply_swap(e: &Env, path: &Vec<Address>, amounts: &Vec<u128>) {
    for i in 0..path.len() - 1 {
        let token_in = path.get_unchecked(i);
        let token_out = path.get_unchecked(i + 1);
        let (reserve_in, reserve_out) = get_reserves(e, &token_in, &token_out);
        set_reserves(
            e,
            &token_in,
            &token_out,
            reserve_in + amounts.get_unchecked(i),
            reserve_out - amounts.get_unchecked(i + 1),
        );
    }
}

fn settle(e: &Env, user: &Address, to: &Address, path: &Vec<Address>, amounts: &Vec<u128>) {
    let amount_in = amounts.get_unchecked(0);
    let amount_out = amounts.get_unchecked(amounts.len() - 1);

    SorobanTokenClient::new(e, &path.get_unchecked(0)).transfer(
        user,
        &e.current_contract_address(),
        &(amount_in as i128),
    );
    apply_swap(e, path, amounts);
    SorobanTokenClient::new(e, &path.get_unchecked(path.len() - 1)).transfer(
        &e.current_contract_address(),
        to,
        &(amount_out as i128),
    );

    Events::new(e).swap(user.clone(), path.clone(), amount_in, amount_out);
}

#[contractimpl]
impl SwapRouter {
    // __constructor
    //
    // Arguments:
    //   - admin: Owner allowed to seed liquidity and change the fee.
    //   - fee_fraction: Swap fee in basis points (30 = 0.3%).
    pub fn __constructor(e: Env, admin: Address, fee_fraction: u32) {
        check_fee_fraction(&e, fee_fraction);
        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        set_fee_fraction(&e, &fee_fraction);
    }

    pub fn get_fee_fraction(e: Env) -> u32 {
        get_fee_fraction(&e)
    }

    // Reserves of the pair in the order of the arguments
    pub fn get_reserves(e: Env, token_a: Address, token_b: Address) -> (u128, u128) {
        get_reserves(&e, &token_a, &token_b)
    }
}

#[contractimpl]
impl AdminInterface for SwapRouter {
    fn add_liquidity(
        e: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
    ) {
        require_admin(&e, &admin);
        if amount_a == 0 || amount_b == 0 {
            panic_with_error!(&e, RouterError::ZeroAmount);
        }

        let (reserve_a, reserve_b) = get_reserves(&e, &token_a, &token_b);
        SorobanTokenClient::new(&e, &token_a).transfer(
            &admin,
            &e.current_contract_address(),
            &(amount_a as i128),
        );
        SorobanTokenClient::new(&e, &token_b).transfer(
            &admin,
            &e.current_contract_address(),
            &(amount_b as i128),
        );
        set_reserves(
            &e,
            &token_a,
            &token_b,
            reserve_a + amount_a,
            reserve_b + amount_b,
        );

        Events::new(&e).add_liquidity(token_a, token_b, amount_a, amount_b);
    }

    fn set_fee_fraction(e: Env, admin: Address, fee_fraction: u32) {
        require_admin(&e, &admin);
        check_fee_fraction(&e, fee_fraction);
        set_fee_fraction(&e, &fee_fraction);
        Events::new(&e).set_fee_fraction(fee_fraction);
    }
}

#[contractimpl]
impl RouterInterface for SwapRouter {
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128> {
        pool::get_amounts_out(&e, amount_in, &path)
    }

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128> {
        pool::get_amounts_in(&e, amount_out, &path)
    }

    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
    ) -> Vec<u128> {
        user.require_auth();

        let amounts = pool::get_amounts_out(&e, amount_in, &path);
        if amounts.get_unchecked(amounts.len() - 1) < amount_out_min {
            panic_with_error!(&e, RouterError::InsufficientOutputAmount);
        }
        settle(&e, &user, &to, &path, &amounts);
        amounts
    }

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
    ) -> Vec<u128> {
        user.require_auth();

        let amounts = pool::get_amounts_in(&e, amount_out, &path);
        if amounts.get_unchecked(0) > amount_in_max {
            panic_with_error!(&e, RouterError::ExcessiveInputAmount);
        }
        settle(&e, &user, &to, &path, &amounts);
        amounts
    }
}

#[contractimpl]
impl TransferableContract for SwapRouter {
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address) {
        require_admin(&e, &admin);
        AccessControl::new(&e).commit_transfer_ownership(&Role::Admin, &new_admin);
        AccessControlEvents::new(&e).commit_transfer_ownership(Role::Admin, new_admin);
    }

    fn apply_transfer_ownership(e: Env, admin: Address) {
        require_admin(&e, &admin);
        let new_admin = AccessControl::new(&e).apply_transfer_ownership(&Role::Admin);
        AccessControlEvents::new(&e).apply_transfer_ownership(Role::Admin, new_admin);
    }

    fn revert_transfer_ownership(e: Env, admin: Address) {
        require_admin(&e, &admin);
        AccessControl::new(&e).revert_transfer_ownership(&Role::Admin);
        AccessControlEvents::new(&e).revert_transfer_ownership(Role::Admin);
    }

    fn get_future_admin(e: Env) -> Option<(Address, u64)> {
        let access_control = AccessControl::new(&e);
        match access_control.get_transfer_ownership_deadline(&Role::Admin) {
            0 => None,
            deadline => Some((access_control.get_future_address(&Role::Admin), deadline)),
        }
    }
}
