//! Core state machine types.
//!
//! - State identities via the `State` trait
//! - Triggers via the `Trigger` trait
//! - Bounded transition history
//!
//! Nothing in this module knows about gumballs; the machine in
//! [`crate::gumball`] plugs its own identities and operations in.

mod history;
mod state;

pub use history::{StateHistory, StateTransition, Trigger};
pub use state::State;
