use crate::calculator::{expected_amount, needed_amount};
use crate::constants::CONTRACT_VERSION;
use crate::errors::OffsetHelperError;
use crate::events::{Events, OffsetHelperEvents};
use crate::interface::{
    CalculatorInterface, LedgerInterface, RegistryInterface, RetirementInterface, SwapInterface,
};
use crate::ledger::{credit, debit};
use crate::storage::{
    get_balance, get_native_token, get_paths, get_pools, get_router, set_native_token,
    set_paths, set_pools, set_router, HelperConfig,
};
use crate::{reentrancy, redeem, registry, retire, swap};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_admin;
use soroban_sdk::token::Client as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Map, Symbol, Vec};

fn lock(e: &Env) {
    reentrancy::acquire(e).unwrap_or_else(|err| panic_with_error!(e, err));
}

#[contract]
pub struct OffsetHelper;

#[contractimpl]
impl OffsetHelper {
    // __constructor
    // Initializes the helper for one deployment.
    //
    // Arguments:
    //   - admin: Owner of the path registry.
    //   - config: Router, native coin contract, eligible pools and initial routes.
    pub fn __constructor(e: Env, admin: Address, config: HelperConfig) {
        for (_, path) in config.paths.iter() {
            if path.is_empty() {
                panic_with_error!(&e, OffsetHelperError::InvalidPath);
            }
        }

        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        set_router(&e, &config.router);
        set_native_token(&e, &config.native_token);
        set_pools(&e, &config.pools);
        set_paths(&e, &config.paths);
    }

    pub fn version() -> u32 {
        CONTRACT_VERSION
    }
}

#[contractimpl]
impl RegistryInterface for OffsetHelper {
    fn is_token_eligible(e: Env, token: Address) -> Vec<Address> {
        registry::eligible_path(&e, &token)
    }

    fn add_path(e: Env, admin: Address, symbol: Symbol, path: Vec<Address>) {
        require_admin(&e, &admin);
        if path.is_empty() {
            panic_with_error!(&e, OffsetHelperError::InvalidPath);
        }

        let mut paths = get_paths(&e);
        paths.set(symbol.clone(), path.clone());
        set_paths(&e, &paths);
        Events::new(&e).add_path(symbol, path);
    }

    fn remove_path(e: Env, admin: Address, symbol: Symbol) {
        require_admin(&e, &admin);

        let mut paths = get_paths(&e);
        if !paths.contains_key(symbol.clone()) {
            panic_with_error!(&e, OffsetHelperError::PathNotFound);
        }
        paths.remove(symbol.clone());
        set_paths(&e, &paths);
        Events::new(&e).remove_path(symbol);
    }

    fn get_paths(e: Env) -> Map<Symbol, Vec<Address>> {
        get_paths(&e)
    }

    fn is_pool_eligible(e: Env, pool: Address) -> bool {
        registry::is_pool_eligible(&e, &pool)
    }

    fn get_pools(e: Env) -> Map<Symbol, Address> {
        get_pools(&e)
    }

    fn get_router(e: Env) -> Address {
        get_router(&e)
    }

    fn get_native_token(e: Env) -> Address {
        get_native_token(&e)
    }
}

#[contractimpl]
impl CalculatorInterface for OffsetHelper {
    fn calc_needed_token_amount(e: Env, from_token: Address, pool: Address, amount: u128) -> u128 {
        needed_amount(&e, &from_token, &pool, amount)
    }

    fn calc_needed_native_amount(e: Env, pool: Address, amount: u128) -> u128 {
        needed_amount(&e, &get_native_token(&e), &pool, amount)
    }

    fn calc_expected_pool_for_token(
        e: Env,
        from_token: Address,
        pool: Address,
        from_amount: u128,
    ) -> u128 {
        expected_amount(&e, &from_token, &pool, from_amount)
    }

    fn calc_expected_pool_for_native(e: Env, pool: Address, from_amount: u128) -> u128 {
        expected_amount(&e, &get_native_token(&e), &pool, from_amount)
    }
}

#[contractimpl]
impl SwapInterface for OffsetHelper {
    fn swap_exact_out_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        amount: u128,
    ) -> u128 {
        user.require_auth();
        lock(&e);
        let amount_in = swap::swap_exact_out_token(&e, &user, &from_token, &pool, amount);
        reentrancy::release(&e);
        amount_in
    }

    fn swap_exact_out_native(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
        max_native_in: u128,
    ) -> u128 {
        user.require_auth();
        lock(&e);
        let amount_in = swap::swap_exact_out_native(&e, &user, &pool, amount, max_native_in);
        reentrancy::release(&e);
        amount_in
    }

    fn swap_exact_in_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        from_amount: u128,
    ) -> u128 {
        user.require_auth();
        lock(&e);
        let amount_out = swap::swap_exact_in_token(&e, &user, &from_token, &pool, from_amount);
        reentrancy::release(&e);
        amount_out
    }

    fn swap_exact_in_native(e: Env, user: Address, pool: Address, native_amount: u128) -> u128 {
        user.require_auth();
        lock(&e);
        let amount_out = swap::swap_exact_in_native(&e, &user, &pool, native_amount);
        reentrancy::release(&e);
        amount_out
    }
}

#[contractimpl]
impl RetirementInterface for OffsetHelper {
    fn auto_redeem(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
    ) -> (Vec<Address>, Vec<u128>) {
        user.require_auth();
        lock(&e);
        let result = redeem::auto_redeem(&e, &user, &pool, amount);
        reentrancy::release(&e);
        result
    }

    fn auto_retire(e: Env, user: Address, project_tokens: Vec<Address>, amounts: Vec<u128>) {
        user.require_auth();
        lock(&e);
        retire::auto_retire(&e, &user, &project_tokens, &amounts);
        reentrancy::release(&e);
    }

    fn auto_offset_exact_in_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        from_amount: u128,
    ) -> (Vec<Address>, Vec<u128>) {
        user.require_auth();
        lock(&e);
        let amount = swap::swap_exact_in_token(&e, &user, &from_token, &pool, from_amount);
        let (project_tokens, amounts) = redeem::auto_redeem(&e, &user, &pool, amount);
        retire::auto_retire(&e, &user, &project_tokens, &amounts);
        reentrancy::release(&e);
        (project_tokens, amounts)
    }

    fn auto_offset_exact_in_native(
        e: Env,
        user: Address,
        pool: Address,
        native_amount: u128,
    ) -> (Vec<Address>, Vec<u128>) {
        user.require_auth();
        lock(&e);
        let amount = swap::swap_exact_in_native(&e, &user, &pool, native_amount);
        let (project_tokens, amounts) = redeem::auto_redeem(&e, &user, &pool, amount);
        retire::auto_retire(&e, &user, &project_tokens, &amounts);
        reentrancy::release(&e);
        (project_tokens, amounts)
    }

    fn auto_offset_exact_out_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        amount: u128,
    ) -> (Vec<Address>, Vec<u128>) {
        user.require_auth();
        lock(&e);
        swap::swap_exact_out_token(&e, &user, &from_token, &pool, amount);
        let (project_tokens, amounts) = redeem::auto_redeem(&e, &user, &pool, amount);
        retire::auto_retire(&e, &user, &project_tokens, &amounts);
        reentrancy::release(&e);
        (project_tokens, amounts)
    }

    fn auto_offset_exact_out_native(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
        max_native_in: u128,
    ) -> (Vec<Address>, Vec<u128>) {
        user.require_auth();
        lock(&e);
        swap::swap_exact_out_native(&e, &user, &pool, amount, max_native_in);
        let (project_tokens, amounts) = redeem::auto_redeem(&e, &user, &pool, amount);
        retire::auto_retire(&e, &user, &project_tokens, &amounts);
        reentrancy::release(&e);
        (project_tokens, amounts)
    }

    fn auto_offset_pool_token(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
    ) -> (Vec<Address>, Vec<u128>) {
        user.require_auth();
        lock(&e);
        deposit_pool_token(&e, &user, &pool, amount);
        let (project_tokens, amounts) = redeem::auto_redeem(&e, &user, &pool, amount);
        retire::auto_retire(&e, &user, &project_tokens, &amounts);
        reentrancy::release(&e);
        (project_tokens, amounts)
    }
}

// pulls an eligible pool token into the user's ledger entry
fn deposit_pool_token(e: &Env, user: &Address, token: &Address, amount: u128) {
    registry::require_pool(e, token);
    if amount == 0 {
        panic_with_error!(e, OffsetHelperError::ZeroAmount);
    }

    SorobanTokenClient::new(e, token).transfer(
        user,
        &e.current_contract_address(),
        &(amount as i128),
    );
    credit(e, user, token, amount);
    Events::new(e).deposit(user.clone(), token.clone(), amount);
}

#[contractimpl]
impl LedgerInterface for OffsetHelper {
    fn deposit(e: Env, user: Address, token: Address, amount: u128) {
        user.require_auth();
        lock(&e);
        deposit_pool_token(&e, &user, &token, amount);
        reentrancy::release(&e);
    }

    fn withdraw(e: Env, user: Address, token: Address, amount: u128) {
        user.require_auth();
        lock(&e);
        if amount == 0 {
            panic_with_error!(&e, OffsetHelperError::ZeroAmount);
        }
        debit(&e, &user, &token, amount, OffsetHelperError::InsufficientBalance);
        SorobanTokenClient::new(&e, &token).transfer(
            &e.current_contract_address(),
            &user,
            &(amount as i128),
        );
        Events::new(&e).withdraw(user, token, amount);
        reentrancy::release(&e);
    }

    fn balances(e: Env, user: Address, token: Address) -> u128 {
        get_balance(&e, &user, &token)
    }
}

#[contractimpl]
impl TransferableContract for OffsetHelper {
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
