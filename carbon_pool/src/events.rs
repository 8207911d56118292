use soroban_sdk::{Address, Env, Symbol, Vec};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

pub(crate) trait CarbonPoolEvents {
    fn deposit(&self, from: Address, project_token: Address, amount: u128);

    fn redeem(&self, from: Address, project_tokens: Vec<Address>, amounts: Vec<u128>);

    fn add_project_token(&self, project_token: Address);

    fn remove_project_token(&self, project_token: Address);
}

impl CarbonPoolEvents for Events {
    fn deposit(&self, from: Address, project_token: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deposit"), from, project_token),
            amount,
        );
    }

    fn redeem(&self, from: Address, project_tokens: Vec<Address>, amounts: Vec<u128>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "redeem"), from),
            (project_tokens, amounts),
        );
    }

    fn add_project_token(&self, project_token: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "add_project_token"), project_token), ());
    }

    fn remove_project_token(&self, project_token: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "remove_project_token"), project_token), ());
    }
}
