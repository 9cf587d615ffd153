//! Closure Kit CLI - run the closure scenarios from the command line
//!
//! Usage:
//! ```bash
//! closure-kit account --initial 1000 balance deposit:500 withdraw:2000
//! closure-kit power --exponent 3 2 4
//! closure-kit greet Alice
//! closure-kit add 3 4
//! closure-kit --config kit.toml demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use closure_kit_core::KitConfig;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Closure Kit - private state, callbacks, decorators and factories
#[derive(Parser)]
#[command(name = "closure-kit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a sequence of actions against a fresh account
    Account {
        /// Opening balance (defaults to the configured one)
        #[arg(long)]
        initial: Option<Decimal>,
        /// Actions: deposit:<amount>, withdraw:<amount> or balance
        #[arg(default_value = "balance")]
        ops: Vec<String>,
    },

    /// Raise numbers to a fixed exponent
    Power {
        /// Exponent captured by the generated function
        #[arg(long, short, default_value_t = 2, allow_negative_numbers = true)]
        exponent: i32,
        /// Inputs
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Fire a login button bound to a username
    Greet {
        /// Username (defaults to the configured one)
        username: Option<String>,
    },

    /// Add two numbers through the logging decorator
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Run all four scenarios with the configured values
    Demo,
}

fn load_config(path: Option<&PathBuf>) -> Result<KitConfig> {
    match path {
        Some(path) => KitConfig::load_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(KitConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Account { initial, ops } => {
            let initial = initial.unwrap_or(config.account.initial_balance);
            commands::account(initial, &ops, cli.json)?;
        }

        Commands::Power { exponent, values } => {
            commands::power(exponent, &values, cli.json)?;
        }

        Commands::Greet { username } => {
            let username = username.unwrap_or_else(|| config.greeting.username.clone());
            commands::greet(&username, cli.json)?;
        }

        Commands::Add { a, b } => {
            commands::add(&config.logger.label, a, b, cli.json)?;
        }

        Commands::Demo => {
            commands::demo(&config)?;
        }
    }

    Ok(())
}
