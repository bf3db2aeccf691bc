//! Gumball: two design patterns, worked through in Rust.
//!
//! - [`gumball`]: a gumball machine built on the **State** pattern. The
//!   machine forwards each operation to the behavior of its current state,
//!   and the behaviors decide where the machine goes next.
//! - [`beverage`]: caffeine beverages built on the **Template Method**
//!   pattern. One fixed recipe, with per-beverage brewing, condiments and a
//!   condiment hook.
//!
//! Around them sit a small generic [`core`] (state identities and transition
//! history), a [`config`] layer and a [`builder`].
//!
//! Every operation reports through typed return values and `tracing` events;
//! the library never prints and never installs a subscriber.
//!
//! # Example
//!
//! ```rust
//! use gumball::builder::GumballMachineBuilder;
//! use gumball::gumball::StateId;
//!
//! let mut machine = GumballMachineBuilder::new().inventory(1).build().unwrap();
//!
//! machine.insert_quarter();
//! machine.turn_crank();
//!
//! assert_eq!(machine.state(), StateId::SoldOut);
//! assert_eq!(machine.count(), 0);
//! ```

pub mod beverage;
pub mod builder;
pub mod config;
pub mod core;
pub mod gumball;

// Re-export commonly used types
pub use beverage::{CaffeineBeverage, Coffee, PrepareRecipe, Tea};
pub use builder::{BuildError, GumballMachineBuilder};
pub use config::MachineConfig;
pub use self::core::{State, StateHistory, StateTransition};
pub use gumball::{GumballMachine, Response, StateId};
