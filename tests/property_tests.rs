//! Property-based tests for the gumball machine.
//!
//! These tests use proptest to drive the machine through many random
//! operation sequences and check that its invariants always hold.

use gumball::gumball::{GumballMachine, Operation, Response, StateId};
use gumball::GumballMachineBuilder;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operation()(variant in 0..4u8) -> Operation {
        match variant {
            0 => Operation::InsertQuarter,
            1 => Operation::EjectQuarter,
            2 => Operation::TurnCrank,
            _ => Operation::Dispense,
        }
    }
}

fn apply(machine: &mut GumballMachine, operation: Operation) -> Vec<Response> {
    match operation {
        Operation::InsertQuarter => vec![machine.insert_quarter()],
        Operation::EjectQuarter => vec![machine.eject_quarter()],
        Operation::TurnCrank => {
            let outcome = machine.turn_crank();
            vec![outcome.crank, outcome.dispense]
        }
        Operation::Dispense => vec![machine.dispense()],
    }
}

proptest! {
    #[test]
    fn inventory_never_increases(
        count in 0..20u32,
        operations in prop::collection::vec(arbitrary_operation(), 0..60)
    ) {
        let mut machine = GumballMachine::new(count);
        let mut previous = machine.count();

        for operation in operations {
            apply(&mut machine, operation);
            prop_assert!(machine.count() <= previous);
            previous = machine.count();
        }
    }

    #[test]
    fn empty_hopper_means_sold_out(
        count in 0..10u32,
        operations in prop::collection::vec(arbitrary_operation(), 0..60)
    ) {
        let mut machine = GumballMachine::new(count);

        for operation in operations {
            apply(&mut machine, operation);
            prop_assert_eq!(machine.count() == 0, machine.state() == StateId::SoldOut);
            // Sold only exists inside a crank turn.
            prop_assert_ne!(machine.state(), StateId::Sold);
        }
    }

    #[test]
    fn rejected_operations_leave_machine_unchanged(
        count in 0..10u32,
        setup in prop::collection::vec(arbitrary_operation(), 0..20),
        operation in arbitrary_operation()
    ) {
        let mut machine = GumballMachine::new(count);
        for step in setup {
            apply(&mut machine, step);
        }

        let state = machine.state();
        let before = machine.count();
        let history = machine.history().len();
        let responses = apply(&mut machine, operation);

        if responses.iter().all(Response::is_rejection) {
            prop_assert_eq!(machine.state(), state);
            prop_assert_eq!(machine.count(), before);
            prop_assert_eq!(machine.history().len(), history);
        }
    }

    #[test]
    fn paid_crank_sells_exactly_one(count in 1..50u32) {
        let mut machine = GumballMachine::new(count);

        machine.insert_quarter();
        let outcome = machine.turn_crank();

        prop_assert!(outcome.released());
        prop_assert_eq!(machine.count(), count - 1);
        let expected = if count == 1 { StateId::SoldOut } else { StateId::NoQuarter };
        prop_assert_eq!(machine.state(), expected);
    }

    #[test]
    fn eject_without_quarter_changes_nothing(count in 1..50u32) {
        let mut machine = GumballMachine::new(count);

        prop_assert_eq!(machine.eject_quarter(), Response::NoQuarterToReturn);
        prop_assert_eq!(machine.state(), StateId::NoQuarter);
        prop_assert_eq!(machine.count(), count);
    }

    #[test]
    fn every_sale_is_recorded(
        count in 1..10u32,
        operations in prop::collection::vec(arbitrary_operation(), 0..40)
    ) {
        let mut machine = GumballMachineBuilder::new()
            .inventory(count)
            .history_limit(None)
            .build()
            .unwrap();
        for operation in operations {
            apply(&mut machine, operation);
        }

        let sales = machine
            .history()
            .transitions()
            .iter()
            .filter(|t| t.from == StateId::Sold)
            .count() as u32;
        prop_assert_eq!(sales, count - machine.count());
    }
}
