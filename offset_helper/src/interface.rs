use soroban_sdk::{Address, Env, Map, Symbol, Vec};

pub trait RegistryInterface {
    // is_token_eligible
    // Looks up the registered route starting at `token`.
    //
    // Returns:
    //   - The route, or an empty vector when `token` cannot be swapped from.
    fn is_token_eligible(e: Env, token: Address) -> Vec<Address>;

    // add_path
    // Registers or overwrites the route for `symbol`. Owner only.
    //
    // Arguments:
    //   - path: Non-empty route, path[0] is the source asset.
    fn add_path(e: Env, admin: Address, symbol: Symbol, path: Vec<Address>);

    // remove_path
    // Unregisters the route for `symbol`. Owner only.
    fn remove_path(e: Env, admin: Address, symbol: Symbol);

    fn get_paths(e: Env) -> Map<Symbol, Vec<Address>>;

    fn is_pool_eligible(e: Env, pool: Address) -> bool;

    fn get_pools(e: Env) -> Map<Symbol, Address>;

    fn get_router(e: Env) -> Address;

    fn get_native_token(e: Env) -> Address;
}

pub trait CalculatorInterface {
    // Input of `from_token` needed to receive exactly `amount` pool tokens.
    fn calc_needed_token_amount(e: Env, from_token: Address, pool: Address, amount: u128) -> u128;

    // Native input needed to receive exactly `amount` pool tokens.
    fn calc_needed_native_amount(e: Env, pool: Address, amount: u128) -> u128;

    // Pool tokens received for exactly `from_amount` of `from_token`.
    fn calc_expected_pool_for_token(
        e: Env,
        from_token: Address,
        pool: Address,
        from_amount: u128,
    ) -> u128;

    // Pool tokens received for exactly `from_amount` of the native coin.
    fn calc_expected_pool_for_native(e: Env, pool: Address, from_amount: u128) -> u128;
}

pub trait SwapInterface {
    // swap_exact_out_token
    // Swaps `from_token` of `user` into exactly `amount` pool tokens credited to the user
    // inside the helper.
    //
    // Returns:
    //   - The amount of `from_token` spent.
    fn swap_exact_out_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        amount: u128,
    ) -> u128;

    // swap_exact_out_native
    // Native counterpart of `swap_exact_out_token`. `max_native_in` is taken from the user
    // and the unused part is refunded in the same call.
    //
    // Returns:
    //   - The native amount spent.
    fn swap_exact_out_native(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
        max_native_in: u128,
    ) -> u128;

    // swap_exact_in_token
    // Swaps exactly `from_amount` of `from_token` into pool tokens credited to the user.
    //
    // Returns:
    //   - The amount of pool tokens credited.
    fn swap_exact_in_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        from_amount: u128,
    ) -> u128;

    // swap_exact_in_native
    // Swaps exactly `native_amount` of the native coin into pool tokens credited to the user.
    fn swap_exact_in_native(e: Env, user: Address, pool: Address, native_amount: u128) -> u128;
}

pub trait RetirementInterface {
    // auto_redeem
    // Redeems pool tokens the user holds in the helper for project tokens, oldest vintage
    // first. Project tokens are credited to the user.
    fn auto_redeem(e: Env, user: Address, pool: Address, amount: u128)
        -> (Vec<Address>, Vec<u128>);

    // auto_retire
    // Retires project tokens the user holds in the helper. Irreversible.
    fn auto_retire(e: Env, user: Address, project_tokens: Vec<Address>, amounts: Vec<u128>);

    // auto_offset_exact_in_token
    // Swap exactly `from_amount` of `from_token`, redeem the result and retire it.
    //
    // Returns:
    //   - Retired project tokens and amounts.
    fn auto_offset_exact_in_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        from_amount: u128,
    ) -> (Vec<Address>, Vec<u128>);

    fn auto_offset_exact_in_native(
        e: Env,
        user: Address,
        pool: Address,
        native_amount: u128,
    ) -> (Vec<Address>, Vec<u128>);

    // auto_offset_exact_out_token
    // Retire exactly `amount` of credits paid with `from_token`.
    fn auto_offset_exact_out_token(
        e: Env,
        user: Address,
        from_token: Address,
        pool: Address,
        amount: u128,
    ) -> (Vec<Address>, Vec<u128>);

    fn auto_offset_exact_out_native(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
        max_native_in: u128,
    ) -> (Vec<Address>, Vec<u128>);

    // auto_offset_pool_token
    // Retire exactly `amount` of credits paid with pool tokens the user holds.
    fn auto_offset_pool_token(
        e: Env,
        user: Address,
        pool: Address,
        amount: u128,
    ) -> (Vec<Address>, Vec<u128>);
}

pub trait LedgerInterface {
    // Moves eligible pool tokens from `user` into the helper, credited to the user.
    fn deposit(e: Env, user: Address, token: Address, amount: u128);

    // Returns tokens the user holds in the helper.
    fn withdraw(e: Env, user: Address, token: Address, amount: u128);

    fn balances(e: Env, user: Address, token: Address) -> u128;
}
