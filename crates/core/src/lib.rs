//! # Closure Kit Core
//!
//! Four closure idioms as small, typed building blocks:
//!
//! - **account** - a handle over a private balance with a single dispatch
//! - **callback** - click handlers bound to the context they were built with
//! - **decorator** - a logging decorator factory
//! - **factory** - power functions that remember their exponent
//!
//! Plus the TOML configuration used by the CLI and demos.

pub mod account;
pub mod callback;
pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;

pub use account::{account_closure, create_account, Account, Action, Amount, Outcome};
pub use callback::{make_button_click_handler, Button};
pub use config::{ConfigError, KitConfig, PowerCase};
pub use decorator::{logger, Logger, Sink};
pub use error::{CoreError, CoreResult};
pub use factory::{make_power, power_factory, power_table};
