//! Basic State Machine
//!
//! This example loads a machine from a JSON configuration and walks it
//! through triggers, a jump, undo and redo.
//!
//! Key concepts:
//! - JSON configuration with an initial state and a state table
//! - Rule-governed `trigger` versus unconditional `change_state`
//! - One step of undo; redo re-fires the last event from wherever you are
//!
//! Run with: cargo run --example basic_state_machine

use serde_json::json;
use statewise::StateMachine;

fn main() {
    println!("=== Basic State Machine Example ===\n");

    let mut machine = StateMachine::from_value(json!({
        "initial": "disconnected",
        "states": {
            "disconnected": { "transitions": { "dial": "connecting" } },
            "connecting": { "transitions": { "accept": "connected", "drop": "disconnected" } },
            "connected": { "transitions": { "drop": "disconnected" } }
        }
    }))
    .unwrap();

    println!("Initial state: {}", machine.current_state());
    println!("All states: {:?}", machine.states(None));
    println!("States handling 'drop': {:?}\n", machine.states(Some("drop")));

    machine.trigger("dial").unwrap();
    println!("After 'dial': {}", machine.current_state());

    machine.trigger("accept").unwrap();
    println!("After 'accept': {}", machine.current_state());

    let undone = machine.undo();
    println!("Undo: {undone} -> {}", machine.current_state());
    let undone = machine.undo();
    println!("Undo again: {undone} -> {}", machine.current_state());
    let redone = machine.redo();
    println!("Redo: {redone} -> {}\n", machine.current_state());

    match machine.trigger("dial") {
        Ok(()) => println!("Unexpected transition"),
        Err(err) => println!("Rejected: {err}"),
    }

    machine.change_state("disconnected").unwrap();
    println!("Jumped to: {}", machine.current_state());

    machine.reset();
    println!("After reset: {}", machine.current_state());

    println!("\n=== Example Complete ===");
}
