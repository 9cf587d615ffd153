//! # Example 02: Callback
//!
//! A handler built now, fired later, still knows who it was built for.
//!
//! Run with: `cargo run -p closure-kit-demos --example 02_callback`

use closure_kit_core::{make_button_click_handler, Button};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Example 02: Callback ===\n");

    let login_button_handler = make_button_click_handler("Alice");
    println!("{}", login_button_handler()); // Welcome back, Alice!

    let mut button = Button::new("login");
    button
        .on_click(make_button_click_handler("Bob"))
        .on_click(|| "session started".to_string());

    for message in button.click() {
        println!("{}", message);
    }
}
