use crate::errors::CarbonPoolError;
use crate::events::{CarbonPoolEvents, Events};
use crate::interface::{AdminInterface, CarbonPoolInterface};
use crate::lots::{add_to_lots, take_oldest_first};
use crate::project::ProjectTokenClient;
use crate::storage::{get_lots, is_accepted, set_accepted, set_lots, Lot};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::role::Role;
use access_control::utils::require_admin;
use soroban_sdk::token::{self, Client as SorobanTokenClient, Interface as _};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};
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
pub struct CarbonPool;

#[contractimpl]
impl CarbonPool {
    // __constructor
    //
    // Arguments:
    //   - admin: Manages the list of accepted project tokens.
    pub fn __constructor(e: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
    }
}

#[contractimpl]
impl CarbonPoolInterface for CarbonPool {
    fn deposit(e: Env, from: Address, project_token: Address, amount: u128) -> u128 {
        from.require_auth();
        if amount == 0 {
            panic_with_error!(&e, CarbonPoolError::ZeroAmount);
        }
        if !is_accepted(&e, &project_token) {
            panic_with_error!(&e, CarbonPoolError::ProjectTokenNotAccepted);
        }
        bump_instance(&e);

        let vintage = ProjectTokenClient::new(&e, &project_token).vintage();
        SorobanTokenClient::new(&e, &project_token).transfer(
            &from,
            &e.current_contract_address(),
            &(amount as i128),
        );

        let mut lots = get_lots(&e);
        add_to_lots(&mut lots, &project_token, vintage, amount);
        set_lots(&e, &lots);

        receive_balance(&e, &from, amount as i128);
        increase_total_supply(&e, amount as i128);
        TokenUtils::new(&e)
            .events()
            .mint(e.current_contract_address(), from.clone(), amount as i128);
        Events::new(&e).deposit(from, project_token, amount);
        amount
    }

    fn redeem_auto(e: Env, from: Address, amount: u128) -> (Vec<Address>, Vec<u128>) {
        from.require_auth();
        if amount == 0 {
            panic_with_error!(&e, CarbonPoolError::ZeroAmount);
        }
        bump_instance(&e);

        spend_balance(&e, &from, amount as i128);
        decrease_total_supply(&e, amount as i128);
        TokenUtils::new(&e).events().burn(from.clone(), amount as i128);

        let mut lots = get_lots(&e);
        let (tokens, amounts) = take_oldest_first(&e, &mut lots, amount);
        set_lots(&e, &lots);

        for (token, token_amount) in tokens.iter().zip(amounts.iter()) {
            SorobanTokenClient::new(&e, &token).transfer(
                &e.current_contract_address(),
                &from,
                &(token_amount as i128),
            );
        }

        Events::new(&e).redeem(from, tokens.clone(), amounts.clone());
        (tokens, amounts)
    }

    fn get_lots(e: Env) -> Vec<Lot> {
        get_lots(&e)
    }

    fn total_supply(e: Env) -> i128 {
        read_total_supply(&e)
    }

    fn is_project_token_accepted(e: Env, project_token: Address) -> bool {
        is_accepted(&e, &project_token)
    }
}

#[contractimpl]
impl AdminInterface for CarbonPool {
    fn add_project_token(e: Env, admin: Address, project_token: Address) {
        require_admin(&e, &admin);
        set_accepted(&e, &project_token, true);
        Events::new(&e).add_project_token(project_token);
    }

    fn remove_project_token(e: Env, admin: Address, project_token: Address) {
        require_admin(&e, &admin);
        set_accepted(&e, &project_token, false);
        Events::new(&e).remove_project_token(project_token);
    }
}

#[contractimpl]
impl token::Interface for CarbonPool {
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

    // burning leaves the backing lots untouched, the pool becomes over-collateralized
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
