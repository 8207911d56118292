#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, UNIT};
use access_control::constants::ADMIN_ACTIONS_DELAY;
use soroban_sdk::testutils::{
    Address as _, AuthorizedFunction, AuthorizedInvocation, MockAuth, MockAuthInvoke,
};
use soroban_sdk::{vec, Address, IntoVal, Symbol};
use utils::test_utils::jump;

#[test]
fn test_ledger_auths() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 10 * UNIT as u128;
    setup.give_pool_tokens(&setup.nct, user, 10 * UNIT);

    helper.deposit(user, &setup.nct.address, &amount);
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    helper.address.clone(),
                    Symbol::new(e, "deposit"),
                    (user, &setup.nct.address, amount).into_val(e),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        setup.nct.address.clone(),
                        Symbol::new(e, "transfer"),
                        (user, &helper.address, amount as i128).into_val(e),
                    )),
                    sub_invocations: std::vec![],
                }],
            }
        )]
    );

    helper.withdraw(user, &setup.nct.address, &amount);
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    helper.address.clone(),
                    Symbol::new(e, "withdraw"),
                    (user, &setup.nct.address, amount).into_val(e),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_redeem_and_retire_auths() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, UNIT);
    helper.deposit(user, &setup.nct.address, &(UNIT as u128));

    let (tokens, amounts) = helper.auto_redeem(user, &setup.nct.address, &(UNIT as u128));
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    helper.address.clone(),
                    Symbol::new(e, "auto_redeem"),
                    (user, &setup.nct.address, UNIT as u128).into_val(e),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );

    helper.auto_retire(user, &tokens, &amounts);
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    helper.address.clone(),
                    Symbol::new(e, "auto_retire"),
                    (user, tokens.clone(), amounts.clone()).into_val(e),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_auto_offset_pool_token_auths() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    let amount = 5 * UNIT as u128;
    setup.give_pool_tokens(&setup.nct, user, 5 * UNIT);

    helper.auto_offset_pool_token(user, &setup.nct.address, &amount);
    assert_eq!(
        e.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    helper.address.clone(),
                    Symbol::new(e, "auto_offset_pool_token"),
                    (user, &setup.nct.address, amount).into_val(e),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        setup.nct.address.clone(),
                        Symbol::new(e, "transfer"),
                        (user, &helper.address, amount as i128).into_val(e),
                    )),
                    sub_invocations: std::vec![],
                }],
            }
        )]
    );
}

#[test]
fn test_withdraw_needs_owner_auth() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = &setup.helper;
    let user = &setup.user;
    let thief = Address::generate(e);
    let amount = UNIT as u128;
    setup.give_pool_tokens(&setup.nct, user, UNIT);

    helper
        .mock_auths(&[MockAuth {
            address: user,
            invoke: &MockAuthInvoke {
                contract: &helper.address,
                fn_name: "deposit",
                args: (user, &setup.nct.address, amount).into_val(e),
                sub_invokes: &[MockAuthInvoke {
                    contract: &setup.nct.address,
                    fn_name: "transfer",
                    args: (user, &helper.address, amount as i128).into_val(e),
                    sub_invokes: &[],
                }],
            },
        }])
        .deposit(user, &setup.nct.address, &amount);
    assert_eq!(helper.balances(user, &setup.nct.address), amount);

    // signed by someone else
    assert!(helper
        .mock_auths(&[MockAuth {
            address: &thief,
            invoke: &MockAuthInvoke {
                contract: &helper.address,
                fn_name: "withdraw",
                args: (user, &setup.nct.address, amount).into_val(e),
                sub_invokes: &[],
            },
        }])
        .try_withdraw(user, &setup.nct.address, &amount)
        .is_err());
    assert!(helper
        .mock_auths(&[MockAuth {
            address: &thief,
            invoke: &MockAuthInvoke {
                contract: &helper.address,
                fn_name: "auto_redeem",
                args: (user, &setup.nct.address, amount).into_val(e),
                sub_invokes: &[],
            },
        }])
        .try_auto_redeem(user, &setup.nct.address, &amount)
        .is_err());
    assert_eq!(helper.balances(user, &setup.nct.address), amount);

    helper
        .mock_auths(&[MockAuth {
            address: user,
            invoke: &MockAuthInvoke {
                contract: &helper.address,
                fn_name: "withdraw",
                args: (user, &setup.nct.address, amount).into_val(e),
                sub_invokes: &[],
            },
        }])
        .withdraw(user, &setup.nct.address, &amount);
    assert_eq!(setup.nct.balance(user), UNIT);
    assert_eq!(helper.balances(user, &setup.nct.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_add_path_third_party_user() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.helper.add_path(
        &setup.user,
        &Symbol::new(e, "USDT"),
        &vec![e, Address::generate(e)],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_remove_path_third_party_user() {
    let setup = Setup::default();

    setup
        .helper
        .remove_path(&setup.user, &Symbol::new(&setup.env, "USDC"));
}

#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let helper = setup.helper;
    let admin_new = Address::generate(&setup.env);

    helper.commit_transfer_ownership(&setup.admin, &admin_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    helper.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #2906)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let helper = setup.helper;
    let admin_new = Address::generate(&setup.env);

    helper.commit_transfer_ownership(&setup.admin, &admin_new);
    helper.commit_transfer_ownership(&setup.admin, &admin_new);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_reverted() {
    let setup = Setup::default();
    let helper = setup.helper;
    let admin_new = Address::generate(&setup.env);

    helper.commit_transfer_ownership(&setup.admin, &admin_new);
    helper.revert_transfer_ownership(&setup.admin);
    assert_eq!(helper.get_future_admin(), None);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    helper.apply_transfer_ownership(&setup.admin);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let e = &setup.env;
    let helper = setup.helper;
    let admin_new = Address::generate(e);
    let usdt = Address::generate(e);

    helper.commit_transfer_ownership(&setup.admin, &admin_new);
    assert_eq!(
        helper.get_future_admin(),
        Some((admin_new.clone(), ADMIN_ACTIONS_DELAY))
    );
    jump(e, ADMIN_ACTIONS_DELAY + 1);
    helper.apply_transfer_ownership(&setup.admin);

    // registry is now managed by the new admin only
    assert!(helper
        .try_add_path(
            &setup.admin,
            &Symbol::new(e, "USDT"),
            &vec![e, usdt.clone()]
        )
        .is_err());
    helper.add_path(&admin_new, &Symbol::new(e, "USDT"), &vec![e, usdt.clone()]);
    assert_eq!(helper.is_token_eligible(&usdt), vec![e, usdt]);
}
