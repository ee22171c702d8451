//! Arithmetic Lexer
//!
//! This example demonstrates the intended workflow: a machine whose
//! transition actions emit typed tokens while it classifies input.
//!
//! Key concepts:
//! - Token emission from transition actions
//! - Multi-state graphs grouping digit runs into one token
//! - Dry runs validating input without emitting
//!
//! Run with: cargo run --example arithmetic_lexer

use statewalk::{token_kind, Machine, TokenStream};
use std::sync::{Arc, Mutex};

token_kind! {
    enum Kind {
        Number,
        Operator,
    }
}

fn main() {
    println!("=== Arithmetic Lexer Example ===\n");

    let tokens = Arc::new(Mutex::new(TokenStream::new()));
    let number = Arc::new(Mutex::new(String::new()));

    // State 0 expects a digit and starts a number; state 1 extends it,
    // closes it on an operator, or lets the input end.
    let mut machine = Machine::new();
    let start = machine.add_state();
    let in_number = machine.add_state();

    let digits = Arc::clone(&number);
    machine[start].when_with(|c: &char| c.is_ascii_digit(), in_number, move |c| {
        digits.lock().unwrap().push(*c);
    });

    let digits = Arc::clone(&number);
    machine[in_number].when_with(|c: &char| c.is_ascii_digit(), in_number, move |c| {
        digits.lock().unwrap().push(*c);
    });
    let digits = Arc::clone(&number);
    let sink = Arc::clone(&tokens);
    machine[in_number].on_one_of_with(['+', '-', '*', '/'], start, move |c| {
        let mut stream = sink.lock().unwrap();
        let lexeme = std::mem::take(&mut *digits.lock().unwrap());
        stream.emit(Kind::Number, lexeme);
        stream.emit_char(Kind::Operator, *c);
    });
    machine[in_number].set_accepting(true);

    let source = "12+345*6";
    println!("Validating {source:?}: {}", machine.dry_run(source.chars()).is_success());

    let outcome = machine.run(source.chars());
    println!("Lexing {source:?}: success = {}", outcome.is_success());

    // Flush the trailing number the input ended inside of.
    if machine[outcome.final_state()].is_accepting() {
        let lexeme = std::mem::take(&mut *number.lock().unwrap());
        tokens.lock().unwrap().emit(Kind::Number, lexeme);
    }

    println!("\nTokens:\n{}", tokens.lock().unwrap());
    println!("=== Example Complete ===");
}
