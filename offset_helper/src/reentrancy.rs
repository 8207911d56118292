use crate::errors::OffsetHelperError;
use crate::storage::{get_locked, set_locked};
use soroban_sdk::Env;

// Taken on entry of every state-changing call. A failed invocation rolls the flag back
// together with the rest of its writes, so release is only needed on success.
pub fn acquire(e: &Env) -> Result<(), OffsetHelperError> {
    if get_locked(e) {
        return Err(OffsetHelperError::Locked);
    }
    set_locked(e, &true);
    Ok(())
}

pub fn release(e: &Env) {
    set_locked(e, &false);
}
