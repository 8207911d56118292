use crate::carbon::ProjectTokenClient;
use crate::errors::OffsetHelperError;
use crate::events::{Events, OffsetHelperEvents};
use crate::ledger::debit;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

// Retires project tokens credited to `user`. Every entry is debited before the first
// retirement call, an entry over the user's holding aborts the whole batch.
pub fn auto_retire(e: &Env, user: &Address, project_tokens: &Vec<Address>, amounts: &Vec<u128>) {
    if project_tokens.len() != amounts.len() {
        panic_with_error!(e, OffsetHelperError::ArrayLengthMismatch);
    }

    for (project_token, amount) in project_tokens.iter().zip(amounts.iter()) {
        debit(
            e,
            user,
            &project_token,
            amount,
            OffsetHelperError::InsufficientProjectTokenBalance,
        );
    }

    for (project_token, amount) in project_tokens.iter().zip(amounts.iter()) {
        if amount > 0 {
            ProjectTokenClient::new(e, &project_token)
                .retire(&e.current_contract_address(), &(amount as i128));
        }
    }

    Events::new(e).retired(user.clone(), project_tokens.clone(), amounts.clone());
}
