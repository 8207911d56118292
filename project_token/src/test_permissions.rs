#![cfg(test)]

use crate::testutils::Setup;
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, IntoVal, Vec};
use utils::test_utils::jump;

#[test]
fn test_mint_third_party_user() {
    let setup = Setup::default();
    let e = &setup.env;
    let token = setup.token;
    let user = Address::generate(e);

    assert!(token
        .mock_auths(&[MockAuth {
            address: &user,
            invoke: &MockAuthInvoke {
                contract: &token.address,
                fn_name: "mint",
                args: Vec::from_array(e, [user.into_val(e), 1000_i128.into_val(e)]),
                sub_invokes: &[],
            },
        }])
        .try_mint(&user, &1000)
        .is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let token = setup.token;
    let admin_new = Address::generate(&setup.env);

    token.commit_transfer_ownership(&setup.admin, &admin_new);
    assert!(token.try_revert_transfer_ownership(&admin_new).is_err());
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    token.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #2906)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let token = setup.token;
    let admin_new = Address::generate(&setup.env);

    token.commit_transfer_ownership(&setup.admin, &admin_new);
    token.commit_transfer_ownership(&setup.admin, &admin_new);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let e = &setup.env;
    let token = setup.token;
    let user = Address::generate(e);
    let admin_new = Address::generate(e);

    token.commit_transfer_ownership(&setup.admin, &admin_new);
    assert_eq!(
        token.get_future_admin(),
        Some((admin_new.clone(), ADMIN_ACTIONS_DELAY))
    );
    jump(e, ADMIN_ACTIONS_DELAY + 1);
    token.apply_transfer_ownership(&setup.admin);
    assert_eq!(token.get_future_admin(), None);

    // new admin is able to mint
    token
        .mock_auths(&[MockAuth {
            address: &admin_new,
            invoke: &MockAuthInvoke {
                contract: &token.address,
                fn_name: "mint",
                args: Vec::from_array(e, [user.into_val(e), 1000_i128.into_val(e)]),
                sub_invokes: &[],
            },
        }])
        .mint(&user, &1000);
    assert_eq!(token.balance(&user), 1000);
}
