//! What the machine says back.
//!
//! An operation that makes no sense in the current state is not an error.
//! It gets a defined response and the machine stays where it is.

use std::fmt;

/// Outcome of a single state operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Response {
    /// Quarter taken; now waiting for the crank
    QuarterAccepted,
    /// A quarter is already in the slot
    QuarterAlreadyInserted,
    /// A gumball is being dispensed
    DispenseInProgress,
    /// The hopper is empty; the quarter is refused
    MachineSoldOut,
    /// Quarter handed back
    QuarterReturned,
    /// Nothing to hand back
    NoQuarterToReturn,
    /// Too late to eject, the crank was turned
    CrankAlreadyTurned,
    /// Crank turned with a quarter in the slot
    CrankTurned,
    /// Crank turned without paying
    NoQuarterInserted,
    /// Crank turned a second time during a sale
    AlreadyDispensing,
    /// Crank turned on an empty machine
    NoGumballs,
    /// One gumball released
    GumballReleased { remaining: u32 },
    /// Dispense requested where there is nothing to dispense
    NothingDispensed,
}

impl Response {
    /// True when the operation did what was asked.
    pub fn is_ack(&self) -> bool {
        matches!(
            self,
            Self::QuarterAccepted
                | Self::QuarterReturned
                | Self::CrankTurned
                | Self::GumballReleased { .. }
        )
    }

    /// True when the operation was refused or had nothing to do.
    pub fn is_rejection(&self) -> bool {
        !self.is_ack()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuarterAccepted => f.write_str("You inserted a quarter"),
            Self::QuarterAlreadyInserted => f.write_str("You can't insert another quarter"),
            Self::DispenseInProgress => {
                f.write_str("Please wait, we're already giving you a gumball")
            }
            Self::MachineSoldOut => {
                f.write_str("You can't insert a quarter, the machine is sold out")
            }
            Self::QuarterReturned => f.write_str("Quarter returned"),
            Self::NoQuarterToReturn => f.write_str("You haven't inserted a quarter"),
            Self::CrankAlreadyTurned => f.write_str("Sorry, you already turned the crank"),
            Self::CrankTurned => f.write_str("You turned..."),
            Self::NoQuarterInserted => f.write_str("You turned, but there's no quarter"),
            Self::AlreadyDispensing => {
                f.write_str("Turning twice doesn't get you another gumball!")
            }
            Self::NoGumballs => f.write_str("You turned, but there are no gumballs"),
            Self::GumballReleased { remaining: 0 } => {
                f.write_str("A gumball comes rolling out the slot... Oops, out of gumballs!")
            }
            Self::GumballReleased { .. } => f.write_str("A gumball comes rolling out the slot..."),
            Self::NothingDispensed => f.write_str("No gumball dispensed"),
        }
    }
}

/// Both halves of turning the crank: the crank itself, then the dispense
/// that runs against whatever state the crank left behind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CrankOutcome {
    pub crank: Response,
    pub dispense: Response,
}

impl CrankOutcome {
    /// True when a gumball came out.
    pub fn released(&self) -> bool {
        matches!(self.dispense, Response::GumballReleased { .. })
    }
}

impl fmt::Display for CrankOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.crank, self.dispense)
    }
}
