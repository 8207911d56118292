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

pub(crate) trait OffsetHelperEvents {
    fn deposit(&self, user: Address, token: Address, amount: u128);

    fn withdraw(&self, user: Address, token: Address, amount: u128);

    fn swap(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
    );

    fn redeemed(
        &self,
        user: Address,
        pool: Address,
        project_tokens: Vec<Address>,
        amounts: Vec<u128>,
    );

    fn retired(&self, user: Address, project_tokens: Vec<Address>, amounts: Vec<u128>);

    fn add_path(&self, symbol: Symbol, path: Vec<Address>);

    fn remove_path(&self, symbol: Symbol);
}

impl OffsetHelperEvents for Events {
    fn deposit(&self, user: Address, token: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deposit"), user, token),
            amount,
        );
    }

    fn withdraw(&self, user: Address, token: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "withdraw"), user, token),
            amount,
        );
    }

    fn swap(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "swap"), user),
            (token_in, token_out, in_amount, out_amount),
        );
    }

    fn redeemed(
        &self,
        user: Address,
        pool: Address,
        project_tokens: Vec<Address>,
        amounts: Vec<u128>,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "redeemed"), user, pool),
            (project_tokens, amounts),
        );
    }

    fn retired(&self, user: Address, project_tokens: Vec<Address>, amounts: Vec<u128>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "retired"), user),
            (project_tokens, amounts),
        );
    }

    fn add_path(&self, symbol: Symbol, path: Vec<Address>) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "add_path"), symbol), (path,));
    }

    fn remove_path(&self, symbol: Symbol) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "remove_path"), symbol), ());
    }
}
