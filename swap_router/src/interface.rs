use soroban_sdk::{Address, Env, Vec};

pub trait RouterInterface {
    // get_amounts_out
    // Quotes an exact input along `path`.
    //
    // Returns:
    //   - Amounts per hop, first element is `amount_in`, last is the final output.
    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128>;

    // get_amounts_in
    // Quotes an exact output along `path`.
    //
    // Returns:
    //   - Amounts per hop, first element is the required input, last is `amount_out`.
    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128>;

    // swap_exact_tokens_for_tokens
    // Sells exactly `amount_in` of path[0], sending the output of the last hop to `to`.
    //
    // Arguments:
    //   - user: Payer of path[0], must be authorized.
    //   - amount_out_min: Minimum acceptable final output.
    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
    ) -> Vec<u128>;

    // swap_tokens_for_exact_tokens
    // Buys exactly `amount_out` of the last path token, spending no more than `amount_in_max`.
    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
    ) -> Vec<u128>;
}

pub trait AdminInterface {
    // Seeds a pair with liquidity pulled from the admin
    fn add_liquidity(
        e: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        amount_a: u128,
        amount_b: u128,
    );

    fn set_fee_fraction(e: Env, admin: Address, fee_fraction: u32);
}
