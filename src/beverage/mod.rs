//! Caffeine beverages built on the Template Method pattern.
//!
//! [`PrepareRecipe::prepare_recipe`] fixes the order of the steps. A
//! beverage only fills in how it brews, which condiments it takes, and
//! optionally whether the customer wants them.
//!
//! # Example
//!
//! ```rust
//! use gumball::beverage::{Coffee, PrepareRecipe, Tea};
//!
//! let tea = Tea::asking(|_question: &str| false);
//! assert!(!tea.prepare_recipe().has_condiments());
//!
//! let coffee = Coffee::new();
//! assert!(coffee.prepare_recipe().has_condiments());
//! ```

mod coffee;
mod hook;
mod prompt;
mod recipe;
mod tea;

pub use coffee::Coffee;
pub use hook::{CondimentHook, PreferenceSource};
pub use prompt::{parse_answer, ConsolePrompt};
pub use recipe::{CaffeineBeverage, PrepareRecipe, Preparation, Step};
pub use tea::Tea;
