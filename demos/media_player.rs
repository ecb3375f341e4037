//! Media Player State Machine
//!
//! This example drives a small player through its states and walks the
//! recorded history back and forth.
//!
//! Key concepts:
//! - Event-driven transitions from a declarative graph
//! - Undo/redo over visited states
//! - The undefined slot reached by an unmapped event
//! - Collapsing history to the current state
//!
//! Run with: cargo run --example media_player

use waypoint::{fsm_config, StateMachine};

fn show(machine: &StateMachine) -> &str {
    machine.state().unwrap_or("<undefined>")
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Media Player State Machine ===\n");

    let mut machine = StateMachine::new(fsm_config! {
        initial: idle,
        states: {
            idle => { start => running },
            running => { stop => idle, pause => paused },
            paused => { resume => running, stop => idle },
        }
    });

    println!("Initial state: {}", show(&machine));
    println!("States: {:?}", machine.states(None));
    println!("States handling 'stop': {:?}\n", machine.states(Some("stop")));

    machine.trigger("start");
    println!("start  -> {}", show(&machine));
    machine.trigger("pause");
    println!("pause  -> {}", show(&machine));

    machine.undo();
    println!("undo   -> {}", show(&machine));
    machine.redo();
    println!("redo   -> {}", show(&machine));

    machine.trigger("pause");
    println!("pause  -> {} (paused does not handle pause)", show(&machine));
    machine.undo();
    println!("undo   -> {}\n", show(&machine));

    println!("History: {:?}", machine.history().path());
    machine.clear_history();
    println!("After clear: {:?}", machine.history().path());
    println!("Can undo: {}", machine.can_undo());

    println!("\n=== Example Complete ===");
}
