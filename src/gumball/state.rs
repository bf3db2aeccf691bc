//! State identities and operations of the gumball machine.

use crate::core::Trigger;
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

state_enum! {
    /// Which of the four behaviors the machine currently runs.
    pub enum StateId {
        /// Waiting for a quarter
        NoQuarter,
        /// Quarter inserted, waiting for the crank
        HasQuarter,
        /// Crank turned, a gumball is on its way
        Sold,
        /// Hopper is empty
        SoldOut,
    }
}

/// The four operations every state answers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    InsertQuarter,
    EjectQuarter,
    TurnCrank,
    Dispense,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Self::InsertQuarter,
        Self::EjectQuarter,
        Self::TurnCrank,
        Self::Dispense,
    ];
}

impl Trigger for Operation {
    fn name(&self) -> &'static str {
        match self {
            Self::InsertQuarter => "insert_quarter",
            Self::EjectQuarter => "eject_quarter",
            Self::TurnCrank => "turn_crank",
            Self::Dispense => "dispense",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Trigger::name(self))
    }
}
