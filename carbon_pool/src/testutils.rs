#![cfg(test)]

use crate::CarbonPoolClient;
use project_token::ProjectTokenClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

pub fn create_pool<'a>(e: &Env, admin: &Address, symbol: &str) -> CarbonPoolClient<'a> {
    CarbonPoolClient::new(
        e,
        &e.register(
            crate::CarbonPool,
            (
                admin.clone(),
                7_u32,
                String::from_str(e, "Carbon Pool Token"),
                String::from_str(e, symbol),
            ),
        ),
    )
}

pub fn create_project_token<'a>(
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

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) pool: CarbonPoolClient<'a>,
    // vintage 2010
    pub(crate) tco2_old: ProjectTokenClient<'a>,
    // vintage 2019
    pub(crate) tco2_new: ProjectTokenClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let pool = create_pool(&env, &admin, "NCT");
        let tco2_old = create_project_token(&env, &admin, "VCS-191", 1_262_304_000);
        let tco2_new = create_project_token(&env, &admin, "VCS-1529", 1_546_300_800);
        pool.add_project_token(&admin, &tco2_old.address);
        pool.add_project_token(&admin, &tco2_new.address);

        Setup {
            env,
            admin,
            pool,
            tco2_old,
            tco2_new,
        }
    }
}
