//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine declared with the
//! `machine_config!` macro, and how redo follows the live rule table.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Declaring configuration in code instead of JSON
//! - Redo resolves the last event against the current state
//!
//! Run with: cargo run --example traffic_light

use statewise::{machine_config, StateMachine, Strictness};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: red,
        states: {
            red => { next => green },
            green => { next => yellow },
            yellow => { next => red },
        }
    }
    .unwrap();

    let mut machine = StateMachine::with_strictness(config, Strictness::Strict).unwrap();
    println!("Initial state: {}\n", machine.current_state());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = machine.current_state().to_string();
        machine.trigger("next").unwrap();
        println!("  {from} -> {}", machine.current_state());
    }

    // Every state handles "next", so redo always advances the cycle.
    println!("\nRedo from {}:", machine.current_state());
    while machine.redo() && machine.current_state() != "red" {
        println!("  now {}", machine.current_state());
    }
    println!("  back at {}", machine.current_state());

    println!("\n=== Example Complete ===");
}
