#![cfg(test)]

use crate::SwapRouterClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Env};

pub(crate) const RESERVE: u128 = 1_000_000_0000000;

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(e, &e.register_stellar_asset_contract_v2(admin.clone()).address())
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub fn create_router<'a>(e: &Env, admin: &Address, fee_fraction: u32) -> SwapRouterClient<'a> {
    SwapRouterClient::new(
        e,
        &e.register(crate::SwapRouter, (admin.clone(), fee_fraction)),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) router: SwapRouterClient<'a>,
    pub(crate) token_a: SorobanTokenClient<'a>,
    pub(crate) token_b: SorobanTokenClient<'a>,
    pub(crate) token_c: SorobanTokenClient<'a>,
}

impl Default for Setup<'_> {
    // three tokens chained as a/b and b/c pairs with equal reserves, 0.3% fee
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let router = create_router(&env, &admin, 30);
        let token_a = create_token_contract(&env, &admin);
        let token_b = create_token_contract(&env, &admin);
        let token_c = create_token_contract(&env, &admin);

        get_token_admin_client(&env, &token_a.address).mint(&admin, &(RESERVE as i128));
        get_token_admin_client(&env, &token_b.address).mint(&admin, &(2 * RESERVE as i128));
        get_token_admin_client(&env, &token_c.address).mint(&admin, &(RESERVE as i128));
        router.add_liquidity(&admin, &token_a.address, &token_b.address, &RESERVE, &RESERVE);
        router.add_liquidity(&admin, &token_b.address, &token_c.address, &RESERVE, &RESERVE);

        Setup {
            env,
            admin,
            router,
            token_a,
            token_b,
            token_c,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn mint(&self, token: &SorobanTokenClient, to: &Address, amount: i128) {
        get_token_admin_client(&self.env, &token.address).mint(to, &amount);
    }
}
