use crate::errors::OffsetHelperError;
use crate::events::{Events, OffsetHelperEvents};
use crate::ledger::credit;
use crate::registry::swap_path;
use crate::router::SwapRouterClient;
use crate::storage::{get_native_token, get_router};
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::Client as SorobanTokenClient;
use soroban_sdk::{log, panic_with_error, vec, Address, Env, IntoVal, Symbol, Vec};

// the router pulls the input from the helper one call deeper, so the transfer is
// pre-authorized for the exact amount
fn authorize_router_pull(e: &Env, token: &Address, router: &Address, amount: u128) {
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (e.current_contract_address(), router.clone(), amount as i128).into_val(e),
            },
            sub_invocations: vec![e],
        }),
    ]);
}

fn pull(e: &Env, token: &Address, from: &Address, amount: u128) {
    SorobanTokenClient::new(e, token).transfer(
        from,
        &e.current_contract_address(),
        &(amount as i128),
    );
}

fn check_amount(e: &Env, amount: u128) {
    if amount == 0 {
        panic_with_error!(e, OffsetHelperError::ZeroAmount);
    }
}

fn quote_in(e: &Env, router: &Address, path: &Vec<Address>, amount: u128) -> u128 {
    SwapRouterClient::new(e, router)
        .get_amounts_in(&amount, path)
        .get_unchecked(0)
}

// Buys exactly `amount` pool tokens, spending `amount_in` of path[0] held by the helper.
fn exact_out(
    e: &Env,
    user: &Address,
    router: &Address,
    path: &Vec<Address>,
    amount: u128,
    amount_in: u128,
) {
    let from_token = path.get_unchecked(0);
    let pool = path.get_unchecked(path.len() - 1);

    authorize_router_pull(e, &from_token, router, amount_in);
    SwapRouterClient::new(e, router).swap_tokens_for_exact_tokens(
        &e.current_contract_address(),
        &amount,
        &amount_in,
        path,
        &e.current_contract_address(),
    );
    log!(e, "exact out swap: in {}, out {}", amount_in, amount);

    credit(e, user, &pool, amount);
    Events::new(e).swap(user.clone(), from_token, pool, amount_in, amount);
}

// Sells exactly `from_amount` of path[0] held by the helper.
//
// Returns:
//   - The amount of pool tokens received.
fn exact_in(
    e: &Env,
    user: &Address,
    router: &Address,
    path: &Vec<Address>,
    from_amount: u128,
) -> u128 {
    let from_token = path.get_unchecked(0);
    let pool = path.get_unchecked(path.len() - 1);

    authorize_router_pull(e, &from_token, router, from_amount);
    let amounts = SwapRouterClient::new(e, router).swap_exact_tokens_for_tokens(
        &e.current_contract_address(),
        &from_amount,
        &0,
        path,
        &e.current_contract_address(),
    );
    let amount_out = amounts.get_unchecked(amounts.len() - 1);
    log!(e, "exact in swap: in {}, out {}", from_amount, amount_out);

    credit(e, user, &pool, amount_out);
    Events::new(e).swap(user.clone(), from_token, pool, from_amount, amount_out);
    amount_out
}

// Returns:
//   - The amount of `from_token` taken from `user`, equal to the exact-out quote.
pub fn swap_exact_out_token(
    e: &Env,
    user: &Address,
    from_token: &Address,
    pool: &Address,
    amount: u128,
) -> u128 {
    check_amount(e, amount);
    let path = swap_path(e, from_token, pool);
    let router = get_router(e);
    let amount_in = quote_in(e, &router, &path, amount);

    pull(e, from_token, user, amount_in);
    exact_out(e, user, &router, &path, amount, amount_in);
    amount_in
}

// `max_native_in` is pulled up front, whatever the swap does not use goes back to `user`,
// leaving the helper's native balance unchanged.
pub fn swap_exact_out_native(
    e: &Env,
    user: &Address,
    pool: &Address,
    amount: u128,
    max_native_in: u128,
) -> u128 {
    check_amount(e, amount);
    let native_token = get_native_token(e);
    let path = swap_path(e, &native_token, pool);
    let router = get_router(e);
    let amount_in = quote_in(e, &router, &path, amount);
    if max_native_in < amount_in {
        panic_with_error!(e, OffsetHelperError::InsufficientNativeAmount);
    }

    pull(e, &native_token, user, max_native_in);
    exact_out(e, user, &router, &path, amount, amount_in);

    let surplus = max_native_in - amount_in;
    if surplus > 0 {
        SorobanTokenClient::new(e, &native_token).transfer(
            &e.current_contract_address(),
            user,
            &(surplus as i128),
        );
    }
    amount_in
}

pub fn swap_exact_in_token(
    e: &Env,
    user: &Address,
    from_token: &Address,
    pool: &Address,
    from_amount: u128,
) -> u128 {
    check_amount(e, from_amount);
    let path = swap_path(e, from_token, pool);

    pull(e, from_token, user, from_amount);
    exact_in(e, user, &get_router(e), &path, from_amount)
}

pub fn swap_exact_in_native(e: &Env, user: &Address, pool: &Address, native_amount: u128) -> u128 {
    check_amount(e, native_amount);
    let native_token = get_native_token(e);
    let path = swap_path(e, &native_token, pool);

    pull(e, &native_token, user, native_amount);
    exact_in(e, user, &get_router(e), &path, native_amount)
}
