//! Tea: steeped, served with lemon.

use super::hook::{CondimentHook, PreferenceSource};
use super::recipe::CaffeineBeverage;

#[derive(Debug, Default)]
pub struct Tea {
    hook: CondimentHook,
}

impl Tea {
    /// Question put to the customer by [`Tea::asking`].
    pub const QUESTION: &'static str = "Would you like Lemon? (y/n)";

    /// Tea that always gets lemon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tea that asks `source` before adding lemon.
    pub fn asking<P>(source: P) -> Self
    where
        P: PreferenceSource + 'static,
    {
        Self::with_hook(CondimentHook::asking(Self::QUESTION, source))
    }

    pub fn with_hook(hook: CondimentHook) -> Self {
        Self { hook }
    }
}

impl CaffeineBeverage for Tea {
    fn name(&self) -> &str {
        "Tea"
    }

    fn brew(&self) -> &str {
        "Steeping the tea"
    }

    fn add_condiments(&self) -> &str {
        "Adding lemon"
    }

    fn customer_wants_condiments(&self) -> bool {
        self.hook.check()
    }
}
