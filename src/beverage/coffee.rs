//! Coffee: dripped through a filter, served with sugar and milk.

use super::hook::{CondimentHook, PreferenceSource};
use super::recipe::CaffeineBeverage;

#[derive(Debug, Default)]
pub struct Coffee {
    hook: CondimentHook,
}

impl Coffee {
    /// Question put to the customer by [`Coffee::asking`].
    pub const QUESTION: &'static str = "Would you like Milk or Sugar? (y/n)";

    /// Coffee that always gets sugar and milk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coffee that asks `source` before adding sugar and milk.
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

impl CaffeineBeverage for Coffee {
    fn name(&self) -> &str {
        "Coffee"
    }

    fn brew(&self) -> &str {
        "Dripping coffee through filter"
    }

    fn add_condiments(&self) -> &str {
        "Adding sugar and milk"
    }

    fn customer_wants_condiments(&self) -> bool {
        self.hook.check()
    }
}
