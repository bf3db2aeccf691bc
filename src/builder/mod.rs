//! Builder API for constructing gumball machines.
//!
//! A fluent builder over [`MachineConfig`](crate::config::MachineConfig)
//! and the [`state_enum!`](crate::state_enum) macro for declaring state
//! identities.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::GumballMachineBuilder;
