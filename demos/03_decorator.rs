//! # Example 03: Decorator
//!
//! `logger("DEBUG")` captures a label; `decorate` wraps a function with it.
//!
//! Run with: `cargo run -p closure-kit-demos --example 03_decorator`

use closure_kit_core::{logger, Logger};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Example 03: Decorator ===\n");

    // Through tracing
    let add = logger("DEBUG").decorate("add", |(a, b): (i32, i32)| a + b);
    add((3, 4));

    // Straight to stdout
    let printer = Logger::with_sink("DEBUG", |line: &str| println!("{}", line));
    let add = printer.decorate("add", |(a, b): (i32, i32)| a + b);
    add((3, 4));
}
