//! Basic Machine
//!
//! This example demonstrates building and running a small machine.
//!
//! Key concepts:
//! - States created by index, state 0 is the start
//! - Fluent per-state transition rules
//! - Success and failure outcomes with located diagnostics
//! - Caller-side acceptance via the accepting flag
//!
//! Run with: cargo run --example basic_machine

use statewalk::Machine;

fn main() {
    println!("=== Basic Machine Example ===\n");

    // Recognize strictly alternating 'A'/'B' starting with 'A'.
    let mut machine = Machine::new();
    let even = machine.add_state();
    let odd = machine.add_state();
    machine[even].on('A', odd).set_accepting(true);
    machine[odd].on('B', even);

    for input in ["ABAB", "ABA", "AA", ""] {
        let outcome = machine.run(input.chars());
        match outcome.error() {
            None => {
                let state = outcome.final_state();
                println!(
                    "{input:?}: success, finished in state {state} (accepting: {})",
                    machine[state].is_accepting()
                );
            }
            Some(fault) => println!("{input:?}: {fault}"),
        }
    }

    println!("\n=== Example Complete ===");
}
