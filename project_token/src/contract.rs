use crate::events::{Events, ProjectTokenEvents};
use crate::interface::ProjectTokenInterface;
use crate::storage::{
    get_project_id, get_retired, get_total_retired, get_vintage, set_project_id, set_retired,
    set_total_retired, set_vintage,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_admin;
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;
use token_base::allowance::{read_allowance, spend_allowance, write_allowance};
use token_base::balance::{
    decrease_total_supply, increase_total_supply, read_balance, read_total_supply,
    receive_balance, spend_balance,
};
use token_base::check_nonnegative_amount;
use token_base::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use utils::bump::bump_instance;

#[contract]
pub struct ProjectToken;

#[contractimpl]
impl ProjectToken {
    pub fn __constructor(
        e: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        project_id: String,
        vintage: u64,
    ) {
        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        set_project_id(&e, &project_id);
        set_vintage(&e, &vintage);
    }
}

#[contractimpl]
impl ProjectTokenInterface for ProjectToken {
    fn mint(e: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&e, amount);
        let admin = AccessControl::new(&e).get_role(&Role::Admin);
        admin.require_auth();

        bump_instance(&e);

        receive_balance(&e, &to, amount);
        increase_total_supply(&e, amount);
        TokenUtils::new(&e).events().mint(admin, to, amount);
    }

    fn retire(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, &from, amount);
        decrease_total_supply(&e, amount);
        set_retired(&e, &from, &(get_retired(&e, &from) + amount));
        set_total_retired(&e, &(get_total_retired(&e) + amount));

        TokenUtils::new(&e).events().burn(from.clone(), amount);
        Events::new(&e).retire(from, amount);
    }

    fn retired(e: Env, user: Address) -> i128 {
        get_retired(&e, &user)
    }

    fn total_retired(e: Env) -> i128 {
        get_total_retired(&e)
    }

    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }

    fn project_id(e: Env) -> String {
        get_project_id(&e)
    }

    fn vintage(e: Env) -> u64 {
        get_vintage(&e)
    }
}

#[contractimpl]
impl token::Interface for ProjectToken {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        TokenUtils::new(&e).events().transfer(from, to, amount)
    }

    // plain burn destroys credits without recording a retirement
    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, &from, amount);
        decrease_total_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        decrease_total_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}

#[contractimpl]
impl TransferableContract for ProjectToken {
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
