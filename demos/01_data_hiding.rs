//! # Example 01: Data Hiding
//!
//! The balance lives inside the handle; the only way in is `dispatch`.
//!
//! Run with: `cargo run -p closure-kit-demos --example 01_data_hiding`

use closure_kit_core::{account_closure, create_account, Action, CoreResult};
use rust_decimal_macros::dec;

fn main() -> CoreResult<()> {
    println!("=== Example 01: Data Hiding ===\n");

    let mut my_account = create_account(dec!(1000))?;
    println!("{}", my_account.dispatch(Action::Balance)); // 1000
    println!("{}", my_account.dispatch(Action::deposit(dec!(500))?)); // Transaction complete
    println!("{}", my_account.dispatch(Action::Balance)); // 1500
    println!("{}", my_account.dispatch(Action::withdraw(dec!(2000))?)); // Insufficient funds

    println!("\n--- Same thing as a bare closure ---\n");

    let mut wallet = account_closure(dec!(20))?;
    println!("{}", wallet(Action::withdraw(dec!(5))?));
    println!("{}", wallet(Action::Balance)); // 15

    println!("\n--- Unknown actions are rejected at parse time ---\n");
    match Action::parse("transfer", dec!(10)) {
        Ok(action) => println!("parsed {}", action),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
