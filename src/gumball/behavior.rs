//! Per-state behaviors.
//!
//! One type per state, all answering the same four operations. Each is a
//! unit struct: the only thing a state touches is the [`MachineContext`]
//! it is handed for the duration of a call.

use super::context::MachineContext;
use super::response::Response;
use super::state::StateId;
use std::fmt::Debug;

/// Behavior of the machine while in one particular state.
pub trait GumballState: Debug + Send + Sync {
    /// Which state this behavior implements.
    fn id(&self) -> StateId;

    fn insert_quarter(&self, machine: &mut MachineContext) -> Response;

    fn eject_quarter(&self, machine: &mut MachineContext) -> Response;

    fn turn_crank(&self, machine: &mut MachineContext) -> Response;

    fn dispense(&self, machine: &mut MachineContext) -> Response;
}

/// Waiting for a quarter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuarterState;

impl GumballState for NoQuarterState {
    fn id(&self) -> StateId {
        StateId::NoQuarter
    }

    fn insert_quarter(&self, machine: &mut MachineContext) -> Response {
        machine.set_state(StateId::HasQuarter);
        Response::QuarterAccepted
    }

    fn eject_quarter(&self, _machine: &mut MachineContext) -> Response {
        Response::NoQuarterToReturn
    }

    fn turn_crank(&self, _machine: &mut MachineContext) -> Response {
        Response::NoQuarterInserted
    }

    fn dispense(&self, _machine: &mut MachineContext) -> Response {
        Response::NothingDispensed
    }
}

/// A quarter is in the slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasQuarterState;

impl GumballState for HasQuarterState {
    fn id(&self) -> StateId {
        StateId::HasQuarter
    }

    fn insert_quarter(&self, _machine: &mut MachineContext) -> Response {
        Response::QuarterAlreadyInserted
    }

    fn eject_quarter(&self, machine: &mut MachineContext) -> Response {
        machine.set_state(StateId::NoQuarter);
        Response::QuarterReturned
    }

    fn turn_crank(&self, machine: &mut MachineContext) -> Response {
        machine.set_state(StateId::Sold);
        Response::CrankTurned
    }

    fn dispense(&self, _machine: &mut MachineContext) -> Response {
        Response::NothingDispensed
    }
}

/// The crank was turned; the next dispense releases a gumball.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoldState;

impl GumballState for SoldState {
    fn id(&self) -> StateId {
        StateId::Sold
    }

    fn insert_quarter(&self, _machine: &mut MachineContext) -> Response {
        Response::DispenseInProgress
    }

    fn eject_quarter(&self, _machine: &mut MachineContext) -> Response {
        Response::CrankAlreadyTurned
    }

    fn turn_crank(&self, _machine: &mut MachineContext) -> Response {
        Response::AlreadyDispensing
    }

    fn dispense(&self, machine: &mut MachineContext) -> Response {
        let released = machine.release_ball();
        let remaining = machine.count();

        if remaining > 0 {
            machine.set_state(StateId::NoQuarter);
        } else {
            machine.set_state(StateId::SoldOut);
        }

        if released {
            Response::GumballReleased { remaining }
        } else {
            Response::NothingDispensed
        }
    }
}

/// The hopper is empty. Nothing leaves this state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoldOutState;

impl GumballState for SoldOutState {
    fn id(&self) -> StateId {
        StateId::SoldOut
    }

    fn insert_quarter(&self, _machine: &mut MachineContext) -> Response {
        Response::MachineSoldOut
    }

    fn eject_quarter(&self, _machine: &mut MachineContext) -> Response {
        Response::NoQuarterToReturn
    }

    fn turn_crank(&self, _machine: &mut MachineContext) -> Response {
        Response::NoGumballs
    }

    fn dispense(&self, _machine: &mut MachineContext) -> Response {
        Response::NothingDispensed
    }
}
