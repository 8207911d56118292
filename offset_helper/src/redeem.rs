use crate::carbon::CarbonPoolClient;
use crate::errors::OffsetHelperError;
use crate::events::{Events, OffsetHelperEvents};
use crate::ledger::{credit, debit};
use crate::registry::require_pool;
use soroban_sdk::{log, panic_with_error, Address, Env, Vec};

// Exchanges `amount` of the user's pool tokens held by the helper for project tokens,
// oldest vintage first. The ledger is debited before the pool is called.
pub fn auto_redeem(
    e: &Env,
    user: &Address,
    pool: &Address,
    amount: u128,
) -> (Vec<Address>, Vec<u128>) {
    require_pool(e, pool);
    if amount == 0 {
        panic_with_error!(e, OffsetHelperError::ZeroAmount);
    }
    debit(
        e,
        user,
        pool,
        amount,
        OffsetHelperError::InsufficientPoolTokenBalance,
    );

    let (project_tokens, amounts) =
        CarbonPoolClient::new(e, pool).redeem_auto(&e.current_contract_address(), &amount);

    if project_tokens.len() != amounts.len() {
        panic_with_error!(e, OffsetHelperError::RedemptionMismatch);
    }
    let mut redeemed: u128 = 0;
    for (project_token, token_amount) in project_tokens.iter().zip(amounts.iter()) {
        redeemed += token_amount;
        credit(e, user, &project_token, token_amount);
    }
    if redeemed != amount {
        panic_with_error!(e, OffsetHelperError::RedemptionMismatch);
    }
    log!(e, "redeemed lots: {}", project_tokens.len());

    Events::new(e).redeemed(user.clone(), pool.clone(), project_tokens.clone(), amounts.clone());
    (project_tokens, amounts)
}
