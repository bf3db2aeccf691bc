//! The gumball machine: four state behaviors and the context they act on.

use super::behavior::{GumballState, HasQuarterState, NoQuarterState, SoldOutState, SoldState};
use super::context::MachineContext;
use super::response::{CrankOutcome, Response};
use super::state::{Operation, StateId};
use crate::config::{ConfigError, MachineConfig, DEFAULT_HISTORY_LIMIT};
use crate::core::{StateHistory, Trigger};
use std::fmt;
use tracing::debug;

/// The four state behaviors, created once with the machine.
#[derive(Debug)]
struct StateTable {
    no_quarter: Box<dyn GumballState>,
    has_quarter: Box<dyn GumballState>,
    sold: Box<dyn GumballState>,
    sold_out: Box<dyn GumballState>,
}

impl StateTable {
    fn new() -> Self {
        Self {
            no_quarter: Box::new(NoQuarterState),
            has_quarter: Box::new(HasQuarterState),
            sold: Box::new(SoldState),
            sold_out: Box::new(SoldOutState),
        }
    }

    fn get(&self, id: StateId) -> &dyn GumballState {
        match id {
            StateId::NoQuarter => self.no_quarter.as_ref(),
            StateId::HasQuarter => self.has_quarter.as_ref(),
            StateId::Sold => self.sold.as_ref(),
            StateId::SoldOut => self.sold_out.as_ref(),
        }
    }
}

/// A gumball machine whose behavior depends on its current state.
///
/// Every operation is forwarded to the behavior of the current state, which
/// may move the machine to another state. Operations that make no sense in
/// the current state answer with a rejection and change nothing.
///
/// # Example
///
/// ```rust
/// use gumball::gumball::{GumballMachine, Response, StateId};
///
/// let mut machine = GumballMachine::new(2);
/// assert_eq!(machine.state(), StateId::NoQuarter);
///
/// assert_eq!(machine.insert_quarter(), Response::QuarterAccepted);
/// let outcome = machine.turn_crank();
/// assert!(outcome.released());
///
/// assert_eq!(machine.count(), 1);
/// assert_eq!(machine.to_string(), "Count: 1 State: NoQuarter");
/// ```
#[derive(Debug)]
pub struct GumballMachine {
    states: StateTable,
    context: MachineContext,
}

impl GumballMachine {
    /// Load `count` gumballs. An empty machine starts sold out.
    pub fn new(count: u32) -> Self {
        Self::build(count, Some(DEFAULT_HISTORY_LIMIT))
    }

    /// Create a machine from a configuration, rejecting invalid ones.
    pub fn with_config(config: MachineConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self::build(config.inventory, config.history_limit))
    }

    fn build(count: u32, history_limit: Option<usize>) -> Self {
        let machine = Self {
            states: StateTable::new(),
            context: MachineContext::new(count, history_limit),
        };
        debug!(count, state = %machine.state(), "Gumball machine created");
        machine
    }

    pub fn insert_quarter(&mut self) -> Response {
        self.dispatch(Operation::InsertQuarter)
    }

    pub fn eject_quarter(&mut self) -> Response {
        self.dispatch(Operation::EjectQuarter)
    }

    /// Turn the crank, then dispense against the state the crank left.
    pub fn turn_crank(&mut self) -> CrankOutcome {
        let crank = self.dispatch(Operation::TurnCrank);
        let dispense = self.dispatch(Operation::Dispense);
        CrankOutcome { crank, dispense }
    }

    /// Dispense on its own, without turning the crank first.
    pub fn dispense(&mut self) -> Response {
        self.dispatch(Operation::Dispense)
    }

    fn dispatch(&mut self, operation: Operation) -> Response {
        let from = self.context.state();
        let behavior = self.states.get(from);
        self.context.begin(operation);

        let response = match operation {
            Operation::InsertQuarter => behavior.insert_quarter(&mut self.context),
            Operation::EjectQuarter => behavior.eject_quarter(&mut self.context),
            Operation::TurnCrank => behavior.turn_crank(&mut self.context),
            Operation::Dispense => behavior.dispense(&mut self.context),
        };

        debug!(
            operation = operation.name(),
            from = %from,
            to = %self.context.state(),
            count = self.context.count(),
            %response,
            "Operation dispatched"
        );
        response
    }

    /// Gumballs left in the hopper.
    pub fn count(&self) -> u32 {
        self.context.count()
    }

    /// Identity of the current state.
    pub fn state(&self) -> StateId {
        self.context.state()
    }

    /// Behavior of the current state.
    pub fn current_state(&self) -> &dyn GumballState {
        self.states.get(self.context.state())
    }

    /// Behavior registered for `id`.
    pub fn state_for(&self, id: StateId) -> &dyn GumballState {
        self.states.get(id)
    }

    pub fn no_quarter_state(&self) -> &dyn GumballState {
        self.states.get(StateId::NoQuarter)
    }

    pub fn has_quarter_state(&self) -> &dyn GumballState {
        self.states.get(StateId::HasQuarter)
    }

    pub fn sold_state(&self) -> &dyn GumballState {
        self.states.get(StateId::Sold)
    }

    pub fn sold_out_state(&self) -> &dyn GumballState {
        self.states.get(StateId::SoldOut)
    }

    /// Transitions recorded so far, oldest first.
    pub fn history(&self) -> &StateHistory<StateId, Operation> {
        self.context.history()
    }
}

impl fmt::Display for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Count: {} State: {}", self.count(), self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_machine_starts_sold_out() {
        let machine = GumballMachine::new(0);
        assert_eq!(machine.state(), StateId::SoldOut);
        assert_eq!(machine.count(), 0);
    }

    #[test]
    fn stocked_machine_starts_waiting_for_quarter() {
        let machine = GumballMachine::new(5);
        assert_eq!(machine.state(), StateId::NoQuarter);
        assert_eq!(machine.to_string(), "Count: 5 State: NoQuarter");
    }

    #[test]
    fn state_accessors_return_matching_behaviors() {
        let machine = GumballMachine::new(1);

        assert_eq!(machine.no_quarter_state().id(), StateId::NoQuarter);
        assert_eq!(machine.has_quarter_state().id(), StateId::HasQuarter);
        assert_eq!(machine.sold_state().id(), StateId::Sold);
        assert_eq!(machine.sold_out_state().id(), StateId::SoldOut);
        for id in StateId::ALL {
            assert_eq!(machine.state_for(*id).id(), *id);
        }
        assert_eq!(machine.current_state().id(), StateId::NoQuarter);
    }

    #[test]
    fn turn_crank_dispenses_against_post_crank_state() {
        let mut machine = GumballMachine::new(3);
        machine.insert_quarter();

        let outcome = machine.turn_crank();

        assert_eq!(outcome.crank, Response::CrankTurned);
        assert_eq!(outcome.dispense, Response::GumballReleased { remaining: 2 });
        assert_eq!(machine.state(), StateId::NoQuarter);
    }

    #[test]
    fn turn_crank_without_quarter_does_nothing() {
        let mut machine = GumballMachine::new(3);

        let outcome = machine.turn_crank();

        assert_eq!(outcome.crank, Response::NoQuarterInserted);
        assert_eq!(outcome.dispense, Response::NothingDispensed);
        assert_eq!(machine.state(), StateId::NoQuarter);
        assert_eq!(machine.count(), 3);
    }

    #[test]
    fn standalone_dispense_with_quarter_is_a_no_op() {
        let mut machine = GumballMachine::new(3);
        machine.insert_quarter();

        assert_eq!(machine.dispense(), Response::NothingDispensed);
        assert_eq!(machine.state(), StateId::HasQuarter);
        assert_eq!(machine.count(), 3);
    }

    #[test]
    fn history_records_a_full_sale() {
        let mut machine = GumballMachine::new(2);
        machine.insert_quarter();
        machine.turn_crank();

        assert_eq!(
            machine.history().get_path(),
            vec![
                StateId::NoQuarter,
                StateId::HasQuarter,
                StateId::Sold,
                StateId::NoQuarter
            ]
        );
        let triggers: Vec<Operation> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| t.trigger)
            .collect();
        assert_eq!(
            triggers,
            vec![
                Operation::InsertQuarter,
                Operation::TurnCrank,
                Operation::Dispense
            ]
        );
    }

    #[test]
    fn rejections_record_no_history() {
        let mut machine = GumballMachine::new(0);
        machine.insert_quarter();
        machine.eject_quarter();
        machine.turn_crank();

        assert!(machine.history().is_empty());
    }

    #[test]
    fn with_config_applies_history_limit() {
        let config = MachineConfig {
            inventory: 10,
            history_limit: Some(2),
            ..MachineConfig::default()
        };
        let mut machine = GumballMachine::with_config(config).unwrap();
        machine.insert_quarter();
        machine.turn_crank();

        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().limit(), Some(2));
    }

    #[test]
    fn with_config_rejects_invalid_config() {
        let config = MachineConfig {
            inventory: 10,
            history_limit: Some(0),
        };

        assert!(matches!(
            GumballMachine::with_config(config),
            Err(ConfigError::Invalid(_))
        ));
    }
}
