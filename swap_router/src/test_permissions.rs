#![cfg(test)]

use crate::testutils::Setup;
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use utils::test_utils::jump;

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_add_liquidity_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.mint(&setup.token_a, &user, 100);
    setup.mint(&setup.token_c, &user, 100);

    setup.router.add_liquidity(
        &user,
        &setup.token_a.address,
        &setup.token_c.address,
        &100,
        &100,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_fee_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);

    setup.router.set_fee_fraction(&user, &10);
}

#[test]
fn test_set_fee_admin() {
    let setup = Setup::default();

    setup.router.set_fee_fraction(&setup.admin, &10);
    assert_eq!(setup.router.get_fee_fraction(), 10);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_set_fee_too_high() {
    let setup = Setup::default();

    setup.router.set_fee_fraction(&setup.admin, &1001);
}

#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let router = setup.router;
    let admin_new = Address::generate(&setup.env);

    router.commit_transfer_ownership(&setup.admin, &admin_new);
    assert!(router.try_revert_transfer_ownership(&admin_new).is_err());
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    router.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_reverted() {
    let setup = Setup::default();
    let router = setup.router;
    let admin_new = Address::generate(&setup.env);

    router.commit_transfer_ownership(&setup.admin, &admin_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    router.revert_transfer_ownership(&setup.admin);
    router.apply_transfer_ownership(&setup.admin);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let router = setup.router;
    let admin_new = Address::generate(&setup.env);

    router.commit_transfer_ownership(&setup.admin, &admin_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    router.apply_transfer_ownership(&setup.admin);

    router.set_fee_fraction(&admin_new, &50);
    assert!(router.try_set_fee_fraction(&setup.admin, &60).is_err());
    assert_eq!(router.get_fee_fraction(), 50);
}
