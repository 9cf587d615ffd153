//! # Example 04: Factory
//!
//! Each generated function keeps its own exponent.
//!
//! Run with: `cargo run -p closure-kit-demos --example 04_factory`

use closure_kit_core::{power_factory, power_table};

fn main() {
    println!("=== Example 04: Factory ===\n");

    let square = power_factory(2);
    let cube = power_factory(3);

    println!("{}", square(4.0)); // 16
    println!("{}", cube(2.0)); // 8

    println!("\n--- A table of powers ---\n");
    for (exponent, power) in power_table(&[1, 2, 3, 4]) {
        println!("3^{} = {}", exponent, power(3.0));
    }
}
