#![cfg(test)]
extern crate std;

use crate::testutils::{create_token_contract, Setup, UNIT};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, IntoVal, Symbol, Vec};

fn sum(amounts: &Vec<u128>) -> u128 {
    amounts.iter().sum()
}

#[test]
fn test_registry_views() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;

    assert_eq!(
        helper.is_token_eligible(&setup.usdc.address),
        vec![e, setup.usdc.address.clone()]
    );
    assert_eq!(
        helper.is_token_eligible(&setup.weth.address),
        vec![e, setup.weth.address.clone(), setup.usdc.address.clone()]
    );
    assert_eq!(helper.is_token_eligible(&Address::generate(e)).len(), 0);
    assert_eq!(helper.get_paths().len(), 3);

    assert!(helper.is_pool_eligible(&setup.nct.address));
    assert!(helper.is_pool_eligible(&setup.bct.address));
    assert!(!helper.is_pool_eligible(&setup.usdc.address));
    assert_eq!(
        helper.get_pools().get(Symbol::new(e, "NCT")),
        Some(setup.nct.address.clone())
    );
    assert_eq!(helper.get_router(), setup.router.address);
    assert_eq!(helper.get_native_token(), setup.native.address);
}

#[test]
fn test_add_and_remove_path() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let usdt = Address::generate(e);
    let usdt_path = vec![e, usdt.clone(), setup.usdc.address.clone()];

    helper.add_path(&setup.admin, &Symbol::new(e, "USDT"), &usdt_path);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "add_path"), Symbol::new(e, "USDT")).into_val(e),
                (usdt_path.clone(),).into_val(e),
            ),
        ]
    );
    assert_eq!(helper.is_token_eligible(&usdt).len(), 2);

    helper.remove_path(&setup.admin, &Symbol::new(e, "USDT"));
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "remove_path"), Symbol::new(e, "USDT")).into_val(e),
                ().into_val(e),
            ),
        ]
    );
    assert_eq!(helper.is_token_eligible(&usdt).len(), 0);
}

#[test]
fn test_add_path_overwrites() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;

    // WETH priced straight against the pool token
    helper.add_path(
        &setup.admin,
        &Symbol::new(e, "WETH"),
        &vec![e, setup.weth.address.clone()],
    );
    assert_eq!(
        helper.is_token_eligible(&setup.weth.address),
        vec![e, setup.weth.address.clone()]
    );
    assert_eq!(helper.get_paths().len(), 3);
}

#[test]
#[should_panic(expected = "Error(Contract, #708)")]
fn test_add_empty_path() {
    let setup = Setup::default();
    let e = &setup.env;

    setup
        .helper
        .add_path(&setup.admin, &Symbol::new(e, "USDT"), &Vec::new(e));
}

#[test]
#[should_panic(expected = "Error(Contract, #709)")]
fn test_remove_unknown_path() {
    let setup = Setup::default();

    setup
        .helper
        .remove_path(&setup.admin, &Symbol::new(&setup.env, "USDT"));
}

#[test]
fn test_calculators_follow_router_quotes() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let amount = 5 * UNIT as u128;

    let weth_path = vec![
        e,
        setup.weth.address.clone(),
        setup.usdc.address.clone(),
        setup.nct.address.clone(),
    ];
    assert_eq!(
        helper.calc_needed_token_amount(&setup.weth.address, &setup.nct.address, &amount),
        setup.router.get_amounts_in(&amount, &weth_path).get_unchecked(0)
    );
    assert_eq!(
        helper.calc_expected_pool_for_token(&setup.weth.address, &setup.nct.address, &amount),
        setup.router.get_amounts_out(&amount, &weth_path).get_unchecked(2)
    );

    let native_path = vec![
        e,
        setup.native.address.clone(),
        setup.usdc.address.clone(),
        setup.bct.address.clone(),
    ];
    assert_eq!(
        helper.calc_needed_native_amount(&setup.bct.address, &amount),
        setup.router.get_amounts_in(&amount, &native_path).get_unchecked(0)
    );
    assert_eq!(
        helper.calc_expected_pool_for_native(&setup.bct.address, &amount),
        setup.router.get_amounts_out(&amount, &native_path).get_unchecked(2)
    );

    // single hop route
    let usdc_path = vec![e, setup.usdc.address.clone(), setup.nct.address.clone()];
    assert_eq!(
        helper.calc_needed_token_amount(&setup.usdc.address, &setup.nct.address, &amount),
        setup.router.get_amounts_in(&amount, &usdc_path).get_unchecked(0)
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_calc_ineligible_pool() {
    let setup = Setup::default();

    setup.helper.calc_needed_token_amount(
        &setup.usdc.address,
        &setup.weth.address,
        &(UNIT as u128),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_calc_ineligible_token() {
    let setup = Setup::default();
    let token = create_token_contract(&setup.env, &setup.admin);

    setup
        .helper
        .calc_expected_pool_for_token(&token.address, &setup.nct.address, &(UNIT as u128));
}

#[test]
fn test_swap_exact_out_token() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 5 * UNIT as u128;
    setup.mint(&setup.weth, user, UNIT);

    let needed = helper.calc_needed_token_amount(&setup.weth.address, &setup.nct.address, &amount);
    let spent = helper.swap_exact_out_token(user, &setup.weth.address, &setup.nct.address, &amount);
    assert_eq!(spent, needed);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "swap"), user.clone()).into_val(e),
                (
                    setup.weth.address.clone(),
                    setup.nct.address.clone(),
                    needed,
                    amount
                )
                    .into_val(e),
            ),
        ]
    );

    assert_eq!(setup.weth.balance(user), UNIT - needed as i128);
    assert_eq!(setup.weth.balance(&helper.address), 0);
    assert_eq!(helper.balances(user, &setup.nct.address), amount);
    assert_eq!(setup.nct.balance(&helper.address), amount as i128);
}

#[test]
fn test_swap_exact_out_native_refunds_surplus() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 5 * UNIT as u128;
    setup.mint(&setup.native, user, 1_000 * UNIT);

    let needed = helper.calc_needed_native_amount(&setup.nct.address, &amount);
    let spent =
        helper.swap_exact_out_native(user, &setup.nct.address, &amount, &(needed + 100 * UNIT as u128));
    assert_eq!(spent, needed);

    assert_eq!(setup.native.balance(user), 1_000 * UNIT - needed as i128);
    assert_eq!(setup.native.balance(&helper.address), 0);
    assert_eq!(helper.balances(user, &setup.nct.address), amount);
}

#[test]
#[should_panic(expected = "Error(Contract, #711)")]
fn test_swap_exact_out_native_not_enough() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 5 * UNIT as u128;
    setup.mint(&setup.native, user, 1_000 * UNIT);

    let needed = helper.calc_needed_native_amount(&setup.nct.address, &amount);
    helper.swap_exact_out_native(user, &setup.nct.address, &amount, &(needed - 1));
}

#[test]
fn test_swap_exact_in_token() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.mint(&setup.usdc, user, 100 * UNIT);

    let expected = helper.calc_expected_pool_for_token(
        &setup.usdc.address,
        &setup.bct.address,
        &(100 * UNIT as u128),
    );
    let received = helper.swap_exact_in_token(
        user,
        &setup.usdc.address,
        &setup.bct.address,
        &(100 * UNIT as u128),
    );
    assert_eq!(received, expected);
    assert_eq!(setup.usdc.balance(user), 0);
    assert_eq!(helper.balances(user, &setup.bct.address), expected);
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
}

#[test]
fn test_swap_exact_in_native() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.mint(&setup.native, user, 100 * UNIT);

    let expected = helper.calc_expected_pool_for_native(&setup.nct.address, &(100 * UNIT as u128));
    let received = helper.swap_exact_in_native(user, &setup.nct.address, &(100 * UNIT as u128));
    assert_eq!(received, expected);
    assert_eq!(setup.native.balance(user), 0);
    assert_eq!(setup.native.balance(&helper.address), 0);
    assert_eq!(helper.balances(user, &setup.nct.address), expected);
}

#[test]
fn test_swap_without_funds() {
    let setup = Setup::default();
    let helper = &setup.helper;

    assert!(helper
        .try_swap_exact_in_token(
            &setup.user,
            &setup.usdc.address,
            &setup.nct.address,
            &(UNIT as u128)
        )
        .is_err());
    assert_eq!(helper.balances(&setup.user, &setup.nct.address), 0);
}

#[test]
fn test_swap_exact_out_without_funds() {
    let setup = Setup::default();
    let helper = &setup.helper;

    assert!(helper
        .try_swap_exact_out_token(
            &setup.user,
            &setup.weth.address,
            &setup.nct.address,
            &(UNIT as u128)
        )
        .is_err());
    assert!(helper
        .try_auto_offset_exact_out_token(
            &setup.user,
            &setup.weth.address,
            &setup.nct.address,
            &(UNIT as u128)
        )
        .is_err());
    assert_eq!(helper.balances(&setup.user, &setup.nct.address), 0);
    assert_eq!(setup.tco2_old.total_retired(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_swap_dust_input() {
    let setup = Setup::default();
    setup.mint(&setup.usdc, &setup.user, 1);

    setup
        .helper
        .swap_exact_in_token(&setup.user, &setup.usdc.address, &setup.nct.address, &1);
}

#[test]
fn test_swap_dust_input_keeps_funds() {
    let setup = Setup::default();
    let helper = &setup.helper;
    setup.mint(&setup.usdc, &setup.user, 1);

    assert!(helper
        .try_auto_offset_exact_in_token(&setup.user, &setup.usdc.address, &setup.nct.address, &1)
        .is_err());
    assert_eq!(setup.usdc.balance(&setup.user), 1);
    assert_eq!(helper.balances(&setup.user, &setup.nct.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #707)")]
fn test_swap_zero() {
    let setup = Setup::default();

    setup
        .helper
        .swap_exact_in_token(&setup.user, &setup.usdc.address, &setup.nct.address, &0);
}

#[test]
fn test_deposit_and_withdraw() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, 10 * UNIT);

    helper.deposit(user, &setup.nct.address, &(10 * UNIT as u128));
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "deposit"), user.clone(), setup.nct.address.clone()).into_val(e),
                (10 * UNIT as u128).into_val(e),
            ),
        ]
    );
    assert_eq!(helper.balances(user, &setup.nct.address), 10 * UNIT as u128);
    assert_eq!(setup.nct.balance(user), 0);

    helper.withdraw(user, &setup.nct.address, &(10 * UNIT as u128));
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
    assert_eq!(setup.nct.balance(user), 10 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #705)")]
fn test_withdraw_over_balance() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, 10 * UNIT);

    helper.deposit(user, &setup.nct.address, &(10 * UNIT as u128));
    helper.withdraw(user, &setup.nct.address, &(10 * UNIT as u128 + 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_deposit_ineligible_token() {
    let setup = Setup::default();
    setup.mint(&setup.usdc, &setup.user, UNIT);

    setup
        .helper
        .deposit(&setup.user, &setup.usdc.address, &(UNIT as u128));
}

#[test]
fn test_deposit_without_funds() {
    let setup = Setup::default();

    assert!(setup
        .helper
        .try_deposit(&setup.user, &setup.nct.address, &(UNIT as u128))
        .is_err());
}

#[test]
fn test_auto_redeem() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, UNIT);
    helper.deposit(user, &setup.nct.address, &(UNIT as u128));

    let supply_before = setup.nct.total_supply();
    let (tokens, amounts) = helper.auto_redeem(user, &setup.nct.address, &(UNIT as u128));
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "redeemed"), user.clone(), setup.nct.address.clone()).into_val(e),
                (tokens.clone(), amounts.clone()).into_val(e),
            ),
        ]
    );

    assert_eq!(tokens, vec![e, setup.tco2_old.address.clone()]);
    assert_eq!(sum(&amounts), UNIT as u128);
    assert_eq!(setup.nct.total_supply(), supply_before - UNIT);
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
    assert_eq!(helper.balances(user, &setup.tco2_old.address), UNIT as u128);
    assert_eq!(setup.tco2_old.balance(&helper.address), UNIT);
}

#[test]
fn test_auto_redeem_spills_into_newer_vintage() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, 150 * UNIT);
    helper.deposit(user, &setup.nct.address, &(150 * UNIT as u128));

    let (tokens, amounts) = helper.auto_redeem(user, &setup.nct.address, &(150 * UNIT as u128));
    assert_eq!(
        tokens,
        vec![
            e,
            setup.tco2_old.address.clone(),
            setup.tco2_new.address.clone()
        ]
    );
    assert_eq!(amounts, vec![e, 100 * UNIT as u128, 50 * UNIT as u128]);
    assert_eq!(helper.balances(user, &setup.tco2_old.address), 100 * UNIT as u128);
    assert_eq!(helper.balances(user, &setup.tco2_new.address), 50 * UNIT as u128);

    // the redeemed credits can be taken out instead of retired
    helper.withdraw(user, &setup.tco2_new.address, &(50 * UNIT as u128));
    assert_eq!(setup.tco2_new.balance(user), 50 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #703)")]
fn test_auto_redeem_without_balance() {
    let setup = Setup::default();

    setup
        .helper
        .auto_redeem(&setup.user, &setup.nct.address, &(UNIT as u128));
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_auto_redeem_ineligible_pool() {
    let setup = Setup::default();

    setup
        .helper
        .auto_redeem(&setup.user, &setup.usdc.address, &(UNIT as u128));
}

#[test]
fn test_auto_retire() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, 150 * UNIT);
    helper.deposit(user, &setup.nct.address, &(150 * UNIT as u128));
    let (tokens, amounts) = helper.auto_redeem(user, &setup.nct.address, &(150 * UNIT as u128));

    helper.auto_retire(user, &tokens, &amounts);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "retired"), user.clone()).into_val(e),
                (tokens.clone(), amounts.clone()).into_val(e),
            ),
        ]
    );

    assert_eq!(helper.balances(user, &setup.tco2_old.address), 0);
    assert_eq!(helper.balances(user, &setup.tco2_new.address), 0);
    assert_eq!(setup.tco2_old.retired(&helper.address), 100 * UNIT);
    assert_eq!(setup.tco2_new.retired(&helper.address), 50 * UNIT);
    assert_eq!(setup.tco2_old.balance(&helper.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #704)")]
fn test_auto_retire_without_balance() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.helper.auto_retire(
        &setup.user,
        &vec![e, setup.tco2_old.address.clone()],
        &vec![e, UNIT as u128],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #704)")]
fn test_auto_retire_partially_funded_batch() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, UNIT);
    helper.deposit(user, &setup.nct.address, &(UNIT as u128));
    helper.auto_redeem(user, &setup.nct.address, &(UNIT as u128));

    helper.auto_retire(
        user,
        &vec![
            e,
            setup.tco2_old.address.clone(),
            setup.tco2_new.address.clone()
        ],
        &vec![e, UNIT as u128, UNIT as u128],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #706)")]
fn test_auto_retire_length_mismatch() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.helper.auto_retire(
        &setup.user,
        &vec![e, setup.tco2_old.address.clone()],
        &vec![e, UNIT as u128, UNIT as u128],
    );
}

#[test]
fn test_auto_offset_exact_in_token() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.mint(&setup.usdc, user, 100 * UNIT);

    let expected = helper.calc_expected_pool_for_token(
        &setup.usdc.address,
        &setup.nct.address,
        &(100 * UNIT as u128),
    );
    let supply_before = setup.nct.total_supply();
    let (tokens, amounts) = helper.auto_offset_exact_in_token(
        user,
        &setup.usdc.address,
        &setup.nct.address,
        &(100 * UNIT as u128),
    );
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                helper.address.clone(),
                (Symbol::new(e, "retired"), user.clone()).into_val(e),
                (tokens.clone(), amounts.clone()).into_val(e),
            ),
        ]
    );

    assert_eq!(sum(&amounts), expected);
    assert_eq!(tokens, vec![e, setup.tco2_old.address.clone()]);
    assert_eq!(setup.usdc.balance(user), 0);
    assert_eq!(setup.nct.total_supply(), supply_before - expected as i128);
    assert_eq!(setup.tco2_old.total_retired(), expected as i128);
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
    assert_eq!(helper.balances(user, &setup.tco2_old.address), 0);
}

#[test]
fn test_auto_offset_exact_in_native() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.mint(&setup.native, user, 500 * UNIT);

    let expected = helper.calc_expected_pool_for_native(&setup.bct.address, &(500 * UNIT as u128));
    let (tokens, amounts) =
        helper.auto_offset_exact_in_native(user, &setup.bct.address, &(500 * UNIT as u128));

    assert_eq!(sum(&amounts), expected);
    assert_eq!(tokens.get_unchecked(0), setup.tco2_new.address);
    assert_eq!(setup.native.balance(user), 0);
    assert_eq!(setup.native.balance(&helper.address), 0);
    assert_eq!(setup.tco2_new.retired(&helper.address), expected as i128);
}

#[test]
fn test_auto_offset_exact_out_token() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 5 * UNIT as u128;
    setup.mint(&setup.weth, user, UNIT);

    let needed = helper.calc_needed_token_amount(&setup.weth.address, &setup.nct.address, &amount);
    let (_, amounts) =
        helper.auto_offset_exact_out_token(user, &setup.weth.address, &setup.nct.address, &amount);

    assert_eq!(sum(&amounts), amount);
    assert_eq!(setup.weth.balance(user), UNIT - needed as i128);
    assert_eq!(setup.tco2_old.total_retired(), amount as i128);
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
}

#[test]
fn test_auto_offset_exact_out_native() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 5 * UNIT as u128;
    setup.mint(&setup.native, user, 2_000 * UNIT);

    let needed = helper.calc_needed_native_amount(&setup.nct.address, &amount);
    let (_, amounts) =
        helper.auto_offset_exact_out_native(user, &setup.nct.address, &amount, &(2_000 * UNIT as u128));

    assert_eq!(sum(&amounts), amount);
    assert_eq!(setup.native.balance(user), 2_000 * UNIT - needed as i128);
    assert_eq!(setup.native.balance(&helper.address), 0);
    assert_eq!(setup.tco2_old.total_retired(), amount as i128);
}

#[test]
fn test_auto_offset_pool_token() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, 150 * UNIT);

    let (tokens, amounts) = helper.auto_offset_pool_token(user, &setup.nct.address, &(150 * UNIT as u128));

    assert_eq!(
        tokens,
        vec![
            e,
            setup.tco2_old.address.clone(),
            setup.tco2_new.address.clone()
        ]
    );
    assert_eq!(amounts, vec![e, 100 * UNIT as u128, 50 * UNIT as u128]);
    assert_eq!(setup.nct.balance(user), 0);
    assert_eq!(setup.tco2_old.total_retired(), 100 * UNIT);
    assert_eq!(setup.tco2_new.total_retired(), 50 * UNIT);
    assert_eq!(setup.nct.get_lots().get_unchecked(0).amount, 5_850 * UNIT as u128);
}

#[test]
fn test_failed_offset_changes_nothing() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.mint(&setup.usdc, user, UNIT);
    let supply_before = setup.nct.total_supply();

    // 50 NCT cost roughly 500 USDC
    assert!(helper
        .try_auto_offset_exact_out_token(
            user,
            &setup.usdc.address,
            &setup.nct.address,
            &(50 * UNIT as u128)
        )
        .is_err());

    assert_eq!(setup.usdc.balance(user), UNIT);
    assert_eq!(setup.nct.total_supply(), supply_before);
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
    assert_eq!(setup.tco2_old.total_retired(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_auto_offset_ineligible_pool() {
    let setup = Setup::default();
    setup.mint(&setup.usdc, &setup.user, UNIT);

    setup.helper.auto_offset_exact_in_token(
        &setup.user,
        &setup.usdc.address,
        &setup.weth.address,
        &(UNIT as u128),
    );
}

#[test]
fn test_version() {
    let setup = Setup::default();
    assert_eq!(setup.helper.version(), 100);
}
