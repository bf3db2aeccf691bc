//! The brewing skeleton shared by every caffeine beverage.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// One executed step of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    BoilWater,
    Brew(String),
    PourInCup,
    AddCondiments(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoilWater => f.write_str("Boiling water"),
            Self::Brew(how) => f.write_str(how),
            Self::PourInCup => f.write_str("Pouring into cup"),
            Self::AddCondiments(what) => f.write_str(what),
        }
    }
}

/// Record of one run of [`PrepareRecipe::prepare_recipe`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preparation {
    pub beverage: String,
    pub steps: Vec<Step>,
}

impl Preparation {
    fn new(beverage: &str) -> Self {
        Self {
            beverage: beverage.to_string(),
            steps: Vec::with_capacity(4),
        }
    }

    fn push(&mut self, step: Step) {
        info!(beverage = %self.beverage, step = %step, "Recipe step");
        self.steps.push(step);
    }

    /// True when condiments were added.
    pub fn has_condiments(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step, Step::AddCondiments(_)))
    }
}

/// Steps a beverage supplies to the shared recipe.
///
/// `brew` and `add_condiments` are mandatory. `customer_wants_condiments`
/// is a hook: it defaults to `true` and may be overridden.
pub trait CaffeineBeverage {
    /// Name used in preparation records and logs.
    fn name(&self) -> &str;

    /// Describe and perform the brewing.
    fn brew(&self) -> &str;

    /// Describe and perform adding condiments.
    fn add_condiments(&self) -> &str;

    fn customer_wants_condiments(&self) -> bool {
        true
    }
}

/// The recipe itself. Implemented for every [`CaffeineBeverage`]; the step
/// order cannot be changed by a beverage.
///
/// 1. boil water
/// 2. brew
/// 3. pour into cup
/// 4. add condiments, if the hook says so
///
/// # Example
///
/// ```rust
/// use gumball::beverage::{CaffeineBeverage, PrepareRecipe, Step};
///
/// struct Cocoa;
///
/// impl CaffeineBeverage for Cocoa {
///     fn name(&self) -> &str { "Cocoa" }
///     fn brew(&self) -> &str { "Whisking cocoa powder" }
///     fn add_condiments(&self) -> &str { "Adding marshmallows" }
/// }
///
/// let preparation = Cocoa.prepare_recipe();
/// assert_eq!(preparation.steps.len(), 4);
/// assert_eq!(preparation.steps[0], Step::BoilWater);
/// assert!(preparation.has_condiments());
/// ```
pub trait PrepareRecipe: CaffeineBeverage {
    fn prepare_recipe(&self) -> Preparation;
}

impl<B: CaffeineBeverage + ?Sized> PrepareRecipe for B {
    fn prepare_recipe(&self) -> Preparation {
        let mut preparation = Preparation::new(self.name());

        preparation.push(Step::BoilWater);
        preparation.push(Step::Brew(self.brew().to_string()));
        preparation.push(Step::PourInCup);
        if self.customer_wants_condiments() {
            preparation.push(Step::AddCondiments(self.add_condiments().to_string()));
        }

        preparation
    }
}
