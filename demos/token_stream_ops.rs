//! Token Stream Operations
//!
//! This example demonstrates post-processing a token stream after a run:
//! trimming delimiters, collapsing runs, and splitting into records.
//!
//! Key concepts:
//! - Trim, collapse, and split by kind
//! - Segment copies and kind searches
//! - Rendering a stream for inspection
//!
//! Run with: cargo run --example token_stream_ops

use statewalk::{token_kind, TokenStream};

token_kind! {
    enum CsvKind {
        Field,
        Comma,
        Space,
    }
}

fn main() {
    println!("=== Token Stream Operations Example ===\n");

    // A stream as a lexer might have produced it: " a , b ,, c "
    let mut stream = TokenStream::new();
    stream.emit(CsvKind::Space, " ");
    stream.emit(CsvKind::Field, "a");
    stream.emit(CsvKind::Space, " ");
    stream.emit_char(CsvKind::Comma, ',');
    stream.emit(CsvKind::Space, " ");
    stream.emit(CsvKind::Space, " ");
    stream.emit(CsvKind::Field, "b");
    stream.emit_char(CsvKind::Comma, ',');
    stream.emit_char(CsvKind::Comma, ',');
    stream.emit(CsvKind::Field, "c");
    stream.emit(CsvKind::Space, " ");

    println!("Raw stream ({} tokens):\n{stream}", stream.len());

    stream.trim(&CsvKind::Space);
    stream.collapse(&CsvKind::Space);
    println!("After trim + collapse ({} tokens)", stream.len());

    if let Some(index) = stream.index_of(&CsvKind::Comma) {
        println!("First comma at index {index}");
        println!("Head segment:\n{}", stream.segment(0, index - 1));
    }

    stream.remove_kind(&CsvKind::Space);
    let fields = stream.split(&CsvKind::Comma);
    println!("Split into {} fields (empty ones included):", fields.len());
    for (i, field) in fields.iter().enumerate() {
        match field.first() {
            Some(token) => println!("  field {i}: {}", token.lexeme),
            None => println!("  field {i}: <empty>"),
        }
    }

    println!("\n=== Example Complete ===");
}
