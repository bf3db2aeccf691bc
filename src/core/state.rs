//! Core State trait for state identities.
//!
//! A state identity names a position in a state machine. It carries no
//! behavior of its own; behaviors are looked up by identity.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state identities.
///
/// All methods are pure. Identities are small `Copy` values so they can be
/// stored in history records and compared freely.
///
/// # Example
///
/// ```rust
/// use gumball::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State:
    Copy + PartialEq + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used for display and logging.
    fn name(&self) -> &'static str;
}
