#![cfg(test)]

use crate::errors::OffsetHelperError;
use crate::reentrancy::{acquire, release};
use crate::storage::{get_locked, set_locked};
use crate::testutils::{Setup, UNIT};

#[test]
fn test_lock_is_exclusive() {
    let setup = Setup::default();

    setup.env.as_contract(&setup.helper.address, || {
        assert!(!get_locked(&setup.env));
        assert_eq!(acquire(&setup.env), Ok(()));
        assert_eq!(acquire(&setup.env), Err(OffsetHelperError::Locked));
        release(&setup.env);
        assert_eq!(acquire(&setup.env), Ok(()));
    });
}

#[test]
fn test_lock_released_after_call() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, 10 * UNIT);

    helper.deposit(user, &setup.nct.address, &(UNIT as u128));
    helper.auto_redeem(user, &setup.nct.address, &(UNIT as u128));
    helper.auto_offset_pool_token(user, &setup.nct.address, &(UNIT as u128));

    setup.env.as_contract(&helper.address, || {
        assert!(!get_locked(&setup.env));
    });
}

#[test]
fn test_failed_call_leaves_lock_free() {
    let setup = Setup::default();
    let helper = &setup.helper;

    assert!(helper
        .try_withdraw(&setup.user, &setup.nct.address, &(UNIT as u128))
        .is_err());
    setup.env.as_contract(&helper.address, || {
        assert!(!get_locked(&setup.env));
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #710)")]
fn test_locked_entry_rejected() {
    let setup = Setup::default();
    let helper = &setup.helper;
    let user = &setup.user;
    setup.give_pool_tokens(&setup.nct, user, UNIT);

    setup.env.as_contract(&helper.address, || {
        set_locked(&setup.env, &true);
    });
    helper.deposit(user, &setup.nct.address, &(UNIT as u128));
}
