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

pub(crate) trait RouterEvents {
    fn add_liquidity(&self, token_a: Address, token_b: Address, amount_a: u128, amount_b: u128);

    fn swap(&self, user: Address, path: Vec<Address>, in_amount: u128, out_amount: u128);

    fn set_fee_fraction(&self, fee_fraction: u32);
}

impl RouterEvents for Events {
    fn add_liquidity(&self, token_a: Address, token_b: Address, amount_a: u128, amount_b: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "add_liquidity"), token_a, token_b),
            (amount_a, amount_b),
        );
    }

    fn swap(&self, user: Address, path: Vec<Address>, in_amount: u128, out_amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "swap"), user),
            (path, in_amount, out_amount),
        );
    }

    fn set_fee_fraction(&self, fee_fraction: u32) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_fee_fraction"),),
            (fee_fraction,),
        );
    }
}
