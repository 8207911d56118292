#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, RESERVE};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, IntoVal, Symbol, Vec};

#[test]
fn test_reserves() {
    let setup = Setup::default();

    assert_eq!(
        setup
            .router
            .get_reserves(&setup.token_a.address, &setup.token_b.address),
        (RESERVE, RESERVE)
    );
    assert_eq!(setup.token_b.balance(&setup.router.address), 2 * RESERVE as i128);
    assert_eq!(
        setup
            .router
            .get_reserves(&setup.token_a.address, &setup.token_c.address),
        (0, 0)
    );
}

#[test]
fn test_quotes() {
    let setup = Setup::default();
    let e = &setup.env;
    let path = vec![
        e,
        setup.token_a.address.clone(),
        setup.token_b.address.clone(),
        setup.token_c.address.clone(),
    ];

    assert_eq!(
        setup.router.get_amounts_out(&1_0000000, &path),
        vec![e, 1_0000000_u128, 9969990_u128, 9940070_u128]
    );
    assert_eq!(
        setup.router.get_amounts_in(&1_0000000, &path),
        vec![e, 10060294_u128, 10030102_u128, 1_0000000_u128]
    );
}

#[test]
fn test_swap_exact_in() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let path = vec![
        e,
        setup.token_a.address.clone(),
        setup.token_b.address.clone(),
        setup.token_c.address.clone(),
    ];
    setup.mint(&setup.token_a, &user, 1_0000000);

    let amounts = setup
        .router
        .swap_exact_tokens_for_tokens(&user, &1_0000000, &9940070, &path, &user);
    assert_eq!(amounts, vec![e, 1_0000000_u128, 9969990_u128, 9940070_u128]);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.router.address.clone(),
                (Symbol::new(e, "swap"), user.clone()).into_val(e),
                (path.clone(), 1_0000000_u128, 9940070_u128).into_val(e),
            ),
        ]
    );

    assert_eq!(setup.token_a.balance(&user), 0);
    assert_eq!(setup.token_c.balance(&user), 9940070);
    assert_eq!(
        setup
            .router
            .get_reserves(&setup.token_a.address, &setup.token_b.address),
        (RESERVE + 1_0000000, RESERVE - 9969990)
    );
    assert_eq!(
        setup
            .router
            .get_reserves(&setup.token_c.address, &setup.token_b.address),
        (RESERVE - 9940070, RESERVE + 9969990)
    );
}

#[test]
fn test_swap_exact_out() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let receiver = Address::generate(e);
    let path = vec![
        e,
        setup.token_a.address.clone(),
        setup.token_b.address.clone(),
        setup.token_c.address.clone(),
    ];
    setup.mint(&setup.token_a, &user, 2_0000000);

    let amounts = setup
        .router
        .swap_tokens_for_exact_tokens(&user, &1_0000000, &2_0000000, &path, &receiver);
    assert_eq!(amounts.get_unchecked(0), 10060294);
    assert_eq!(setup.token_a.balance(&user), 2_0000000 - 10060294);
    assert_eq!(setup.token_c.balance(&receiver), 1_0000000);
}

#[test]
fn test_quote_is_reverse_direction_aware() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.mint(&setup.token_a, &user, 10_0000000);

    let forward = vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()];
    let backward = vec![e, setup.token_b.address.clone(), setup.token_a.address.clone()];
    setup
        .router
        .swap_exact_tokens_for_tokens(&user, &10_0000000, &0, &forward, &user);

    // a is now cheaper than b, so selling b yields more a
    let out_forward: Vec<u128> = setup.router.get_amounts_out(&1_0000000, &forward);
    let out_backward: Vec<u128> = setup.router.get_amounts_out(&1_0000000, &backward);
    assert!(out_backward.get_unchecked(1) > out_forward.get_unchecked(1));
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_swap_exact_in_slippage() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let path = vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()];
    setup.mint(&setup.token_a, &user, 1_0000000);

    setup
        .router
        .swap_exact_tokens_for_tokens(&user, &1_0000000, &1_0000000, &path, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_dust_input_quotes_nothing() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.router.get_amounts_out(
        &1,
        &vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()],
    );
}

#[test]
fn test_swap_dust_input() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let path = vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()];
    setup.mint(&setup.token_a, &user, 1);

    assert!(setup
        .router
        .try_swap_exact_tokens_for_tokens(&user, &1, &0, &path, &user)
        .is_err());
    assert_eq!(setup.token_a.balance(&user), 1);
    assert_eq!(
        setup
            .router
            .get_reserves(&setup.token_a.address, &setup.token_b.address),
        (RESERVE, RESERVE)
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_swap_exact_out_in_max() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let path = vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()];
    setup.mint(&setup.token_a, &user, 2_0000000);

    setup
        .router
        .swap_tokens_for_exact_tokens(&user, &1_0000000, &1_0000000, &path, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_single_token_path() {
    let setup = Setup::default();
    let e = &setup.env;

    setup
        .router
        .get_amounts_out(&1_0000000, &vec![e, setup.token_a.address.clone()]);
}

#[test]
#[should_panic(expected = "Error(Contract, #304)")]
fn test_missing_pair() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.router.get_amounts_out(
        &1_0000000,
        &vec![e, setup.token_a.address.clone(), setup.token_c.address.clone()],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn test_identical_tokens() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.router.get_amounts_out(
        &1_0000000,
        &vec![e, setup.token_a.address.clone(), setup.token_a.address.clone()],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #307)")]
fn test_exact_out_over_reserve() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.router.get_amounts_in(
        &RESERVE,
        &vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()],
    );
}

#[test]
fn test_swap_without_funds() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    let path = vec![e, setup.token_a.address.clone(), setup.token_b.address.clone()];

    assert!(setup
        .router
        .try_swap_exact_tokens_for_tokens(&user, &1_0000000, &0, &path, &user)
        .is_err());
    assert_eq!(
        setup
            .router
            .get_reserves(&setup.token_a.address, &setup.token_b.address),
        (RESERVE, RESERVE)
    );
}
