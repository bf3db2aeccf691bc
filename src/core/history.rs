//! State transition history tracking.
//!
//! Records which state changes happened, what triggered them and when.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;

/// An external request that can cause a transition.
pub trait Trigger: Copy + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Name used for display and logging.
    fn name(&self) -> &'static str;
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use gumball::core::StateTransition;
/// use gumball::gumball::{Operation, StateId};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: StateId::NoQuarter,
///     to: StateId::HasQuarter,
///     trigger: Operation::InsertQuarter,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, StateId::HasQuarter);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, T: Trigger> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The operation that caused the move
    pub trigger: T,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions, optionally bounded.
///
/// With a limit of `Some(n)` only the `n` most recent transitions are kept.
///
/// # Example
///
/// ```rust
/// use gumball::core::{StateHistory, StateTransition};
/// use gumball::gumball::{Operation, StateId};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: StateId::NoQuarter,
///     to: StateId::HasQuarter,
///     trigger: Operation::InsertQuarter,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: StateId::HasQuarter,
///     to: StateId::Sold,
///     trigger: Operation::TurnCrank,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![StateId::NoQuarter, StateId::HasQuarter, StateId::Sold]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, T: Trigger> {
    transitions: Vec<StateTransition<S, T>>,
    limit: Option<usize>,
}

impl<S: State, T: Trigger> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> StateHistory<S, T> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` transitions.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            transitions: Vec::new(),
            limit,
        }
    }

    /// Maximum number of transitions retained, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a transition, evicting the oldest ones past the limit.
    pub fn record(&mut self, transition: StateTransition<S, T>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            if self.transitions.len() > limit {
                let excess = self.transitions.len() - limit;
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// The `from` state of the oldest retained transition, then the `to`
    /// state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Elapsed time between the oldest and newest retained transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S, T>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
