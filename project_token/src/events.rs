use soroban_sdk::{Address, Env, Symbol};

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

pub(crate) trait ProjectTokenEvents {
    fn retire(&self, from: Address, amount: i128);
}

impl ProjectTokenEvents for Events {
    fn retire(&self, from: Address, amount: i128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "retire"), from), amount);
    }
}
