//! Gumball machine built on the State pattern.
//!
//! The machine holds one behavior per state and forwards each operation to
//! the behavior of its current state. Behaviors decide the response and,
//! through the [`MachineContext`] they are lent, which state comes next.
//!
//! | Operation      | NoQuarter   | HasQuarter | Sold                 | SoldOut  |
//! |----------------|-------------|------------|----------------------|----------|
//! | insert_quarter | →HasQuarter | rejected   | rejected             | rejected |
//! | eject_quarter  | rejected    | →NoQuarter | rejected             | rejected |
//! | turn_crank     | rejected    | →Sold      | rejected             | rejected |
//! | dispense       | no-op       | no-op      | release, →NoQuarter or →SoldOut | no-op |

mod behavior;
mod context;
mod machine;
mod response;
mod state;

pub use behavior::{GumballState, HasQuarterState, NoQuarterState, SoldOutState, SoldState};
pub use context::MachineContext;
pub use machine::GumballMachine;
pub use response::{CrankOutcome, Response};
pub use state::{Operation, StateId};
