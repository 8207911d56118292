#![cfg(test)]
extern crate std;

use crate::{HelperConfig, OffsetHelperClient};
use carbon_pool::CarbonPoolClient;
use project_token::ProjectTokenClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{map, vec, Address, Env, String, Symbol};
use swap_router::SwapRouterClient;

// one unit with 7 decimals
pub(crate) const UNIT: i128 = 1_0000000;

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(e, &e.register_stellar_asset_contract_v2(admin.clone()).address())
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub(crate) fn create_router<'a>(e: &Env, admin: &Address) -> SwapRouterClient<'a> {
    SwapRouterClient::new(e, &e.register(swap_router::SwapRouter, (admin.clone(), 30_u32)))
}

pub(crate) fn create_pool<'a>(
    e: &Env,
    admin: &Address,
    name: &str,
    symbol: &str,
) -> CarbonPoolClient<'a> {
    CarbonPoolClient::new(
        e,
        &e.register(
            carbon_pool::CarbonPool,
            (
                admin.clone(),
                7_u32,
                String::from_str(e, name),
                String::from_str(e, symbol),
            ),
        ),
    )
}

pub(crate) fn create_project_token<'a>(
    e: &Env,
    admin: &Address,
    project_id: &str,
    vintage: u64,
) -> ProjectTokenClient<'a> {
    ProjectTokenClient::new(
        e,
        &e.register(
            project_token::ProjectToken,
            (
                admin.clone(),
                7_u32,
                String::from_str(e, "Toucan Protocol: TCO2"),
                String::from_str(e, "TCO2"),
                String::from_str(e, project_id),
                vintage,
            ),
        ),
    )
}

pub(crate) fn create_helper<'a>(
    e: &Env,
    admin: &Address,
    config: &HelperConfig,
) -> OffsetHelperClient<'a> {
    OffsetHelperClient::new(
        e,
        &e.register(crate::OffsetHelper, (admin.clone(), config.clone())),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) user: Address,
    pub(crate) helper: OffsetHelperClient<'a>,
    pub(crate) router: SwapRouterClient<'a>,

    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) usdc: SorobanTokenClient<'a>,
    pub(crate) weth: SorobanTokenClient<'a>,

    // backed by 100 units of tco2_old and 5900 of tco2_new
    pub(crate) nct: CarbonPoolClient<'a>,
    // backed by 6000 units of tco2_new
    pub(crate) bct: CarbonPoolClient<'a>,
    // vintage 2010
    pub(crate) tco2_old: ProjectTokenClient<'a>,
    // vintage 2019
    pub(crate) tco2_new: ProjectTokenClient<'a>,
}

impl Default for Setup<'_> {
    // Pools funded with project tokens, router seeded with
    // XLM/USDC at 0.1, WETH/USDC at 2000, USDC/NCT at 10 and USDC/BCT at 4.
    // The admin keeps 1000 NCT and 1000 BCT.
    fn default() -> Self {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);

        let native = create_token_contract(&e, &admin);
        let usdc = create_token_contract(&e, &admin);
        let weth = create_token_contract(&e, &admin);

        let tco2_old = create_project_token(&e, &admin, "VCS-191", 1_262_304_000);
        let tco2_new = create_project_token(&e, &admin, "VCS-1529", 1_546_300_800);
        tco2_old.mint(&admin, &(100 * UNIT));
        tco2_new.mint(&admin, &(11_900 * UNIT));

        let nct = create_pool(&e, &admin, "Toucan Protocol: Nature Carbon Tonne", "NCT");
        let bct = create_pool(&e, &admin, "Toucan Protocol: Base Carbon Tonne", "BCT");
        nct.add_project_token(&admin, &tco2_old.address);
        nct.add_project_token(&admin, &tco2_new.address);
        bct.add_project_token(&admin, &tco2_new.address);
        nct.deposit(&admin, &tco2_old.address, &(100 * UNIT as u128));
        nct.deposit(&admin, &tco2_new.address, &(5_900 * UNIT as u128));
        bct.deposit(&admin, &tco2_new.address, &(6_000 * UNIT as u128));

        get_token_admin_client(&e, &native.address).mint(&admin, &(1_000_000 * UNIT));
        get_token_admin_client(&e, &usdc.address).mint(&admin, &(420_000 * UNIT));
        get_token_admin_client(&e, &weth.address).mint(&admin, &(100 * UNIT));

        let router = create_router(&e, &admin);
        router.add_liquidity(
            &admin,
            &native.address,
            &usdc.address,
            &(1_000_000 * UNIT as u128),
            &(100_000 * UNIT as u128),
        );
        router.add_liquidity(
            &admin,
            &weth.address,
            &usdc.address,
            &(100 * UNIT as u128),
            &(200_000 * UNIT as u128),
        );
        router.add_liquidity(
            &admin,
            &usdc.address,
            &nct.address,
            &(50_000 * UNIT as u128),
            &(5_000 * UNIT as u128),
        );
        router.add_liquidity(
            &admin,
            &usdc.address,
            &bct.address,
            &(20_000 * UNIT as u128),
            &(5_000 * UNIT as u128),
        );

        let config = HelperConfig {
            router: router.address.clone(),
            native_token: native.address.clone(),
            pools: map![
                &e,
                (Symbol::new(&e, "BCT"), bct.address.clone()),
                (Symbol::new(&e, "NCT"), nct.address.clone())
            ],
            paths: map![
                &e,
                (Symbol::new(&e, "USDC"), vec![&e, usdc.address.clone()]),
                (
                    Symbol::new(&e, "WETH"),
                    vec![&e, weth.address.clone(), usdc.address.clone()]
                ),
                (
                    Symbol::new(&e, "XLM"),
                    vec![&e, native.address.clone(), usdc.address.clone()]
                )
            ],
        };
        let helper = create_helper(&e, &admin, &config);

        Setup {
            env: e,
            admin,
            user,
            helper,
            router,
            native,
            usdc,
            weth,
            nct,
            bct,
            tco2_old,
            tco2_new,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn mint(&self, token: &SorobanTokenClient, to: &Address, amount: i128) {
        get_token_admin_client(&self.env, &token.address).mint(to, &amount);
    }

    // hands pool tokens held by the admin to `to`
    pub(crate) fn give_pool_tokens(&self, pool: &CarbonPoolClient, to: &Address, amount: i128) {
        pool.transfer(&self.admin, to, &amount);
    }
}
