#![cfg(test)]

use crate::ProjectTokenClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

pub fn create_project_token<'a>(
    e: &Env,
    admin: &Address,
    project_id: &str,
    vintage: u64,
) -> ProjectTokenClient<'a> {
    ProjectTokenClient::new(
        e,
        &e.register(
            crate::ProjectToken,
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
    pub(crate) token: ProjectTokenClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let token = create_project_token(&env, &admin, "VCS-1529", 1_546_300_800);
        Setup { env, admin, token }
    }
}
