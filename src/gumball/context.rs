//! The mutable part of the machine that state behaviors act on.

use super::state::{Operation, StateId};
use crate::core::{StateHistory, StateTransition};
use chrono::Utc;
use tracing::{info, warn};

/// Inventory, current state and transition history.
///
/// A [`GumballState`](super::GumballState) never owns this; the machine lends
/// it out for the length of one operation. Outside the crate it is read-only:
/// only the built-in state behaviors release gumballs or move the machine, so
/// an empty hopper always means SoldOut.
#[derive(Debug, Clone)]
pub struct MachineContext {
    count: u32,
    state: StateId,
    trigger: Operation,
    history: StateHistory<StateId, Operation>,
}

impl MachineContext {
    /// Context holding `count` gumballs, in NoQuarter when stocked and
    /// SoldOut when empty.
    pub(crate) fn new(count: u32, history_limit: Option<usize>) -> Self {
        let state = if count > 0 {
            StateId::NoQuarter
        } else {
            StateId::SoldOut
        };

        Self {
            count,
            state,
            trigger: Operation::InsertQuarter,
            history: StateHistory::with_limit(history_limit),
        }
    }

    /// Gumballs left in the hopper.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Identity of the current state.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Transitions recorded so far.
    pub fn history(&self) -> &StateHistory<StateId, Operation> {
        &self.history
    }

    /// Move the machine to `next`, recording the change against the
    /// operation being dispatched. Moving to the current state is a no-op.
    pub(crate) fn set_state(&mut self, next: StateId) {
        if next == self.state {
            return;
        }

        info!(
            from = %self.state,
            to = %next,
            trigger = %self.trigger,
            count = self.count,
            "State transition"
        );

        self.history.record(StateTransition {
            from: self.state,
            to: next,
            trigger: self.trigger,
            timestamp: Utc::now(),
        });
        self.state = next;
    }

    /// Drop one gumball out of the hopper.
    ///
    /// Returns `false` and leaves the count alone when the hopper is already
    /// empty; the count never goes below zero.
    pub(crate) fn release_ball(&mut self) -> bool {
        if self.count == 0 {
            warn!(state = %self.state, "Release requested with an empty hopper");
            return false;
        }

        self.count -= 1;
        info!(remaining = self.count, "A gumball comes rolling out the slot");
        true
    }

    pub(crate) fn begin(&mut self, operation: Operation) {
        self.trigger = operation;
    }
}
