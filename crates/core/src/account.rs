//! # Account Module
//!
//! A handle that owns a private balance. The balance can only be observed or
//! changed through [`Account::dispatch`], the same way a closure keeps its
//! captured variable out of reach of everything but its own body.
//!
//! ```
//! use closure_kit_core::{create_account, Action, Outcome};
//! use rust_decimal::Decimal;
//!
//! let mut account = create_account(Decimal::from(1000)).unwrap();
//! let deposit = Action::deposit(Decimal::from(500)).unwrap();
//!
//! assert_eq!(account.dispatch(deposit), Outcome::TransactionComplete);
//! assert_eq!(account.dispatch(Action::Balance), Outcome::Balance(Decimal::from(1500)));
//! ```

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative quantity of currency units.
///
/// Constructing one is the only place amounts are validated, so every
/// [`Action`] carries an amount that cannot drive the balance below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Validate a raw decimal
    pub fn new(value: Decimal) -> CoreResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CoreError::InvalidAmount(format!(
                "{} is negative",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CoreError;

    fn try_from(value: Decimal) -> CoreResult<Self> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| CoreError::InvalidAmount(format!("{}: {}", s, e)))?;
        Amount::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of operations a handle accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "lowercase")]
pub enum Action {
    /// Add the amount to the balance
    Deposit(Amount),
    /// Remove the amount if the balance covers it
    Withdraw(Amount),
    /// Read the current balance
    Balance,
}

impl Action {
    /// Build a deposit, rejecting negative amounts
    pub fn deposit(amount: Decimal) -> CoreResult<Self> {
        Ok(Action::Deposit(Amount::new(amount)?))
    }

    /// Build a withdrawal, rejecting negative amounts
    pub fn withdraw(amount: Decimal) -> CoreResult<Self> {
        Ok(Action::Withdraw(Amount::new(amount)?))
    }

    /// Parse an action by name.
    ///
    /// `amount` is ignored for `balance`. Unrecognized names are an error
    /// rather than a silent no-op.
    pub fn parse(name: &str, amount: Decimal) -> CoreResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "deposit" => Action::deposit(amount),
            "withdraw" => Action::withdraw(amount),
            "balance" => Ok(Action::Balance),
            other => Err(CoreError::UnknownAction(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Deposit(_) => "deposit",
            Action::Withdraw(_) => "withdraw",
            Action::Balance => "balance",
        }
    }

    /// Amount carried by the action, if any
    pub fn amount(&self) -> Option<Amount> {
        match self {
            Action::Deposit(amount) | Action::Withdraw(amount) => Some(*amount),
            Action::Balance => None,
        }
    }
}

/// Parses `deposit:500`, `withdraw:20.5` or `balance`.
impl FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.split_once(':') {
            Some((name, amount)) => {
                let amount: Amount = amount.parse()?;
                Action::parse(name, amount.value())
            }
            None => match s.trim().to_lowercase().as_str() {
                "balance" => Ok(Action::Balance),
                "deposit" | "withdraw" => Err(CoreError::InvalidAmount(format!(
                    "{} requires an amount, e.g. {}:100",
                    s.trim(),
                    s.trim()
                ))),
                other => Err(CoreError::UnknownAction(other.to_string())),
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Some(amount) => write!(f, "{}:{}", self.as_str(), amount),
            None => write!(f, "{}", self.as_str()),
        }
    }
}

/// Result of a dispatch.
///
/// Refused transactions are values, not errors; callers inspect the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "balance", rename_all = "snake_case")]
pub enum Outcome {
    TransactionComplete,
    InsufficientFunds,
    /// Deposit would exceed the largest representable balance
    BalanceLimitExceeded,
    Balance(Decimal),
}

impl Outcome {
    /// False for refused transactions
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Outcome::InsufficientFunds | Outcome::BalanceLimitExceeded
        )
    }

    pub fn as_balance(&self) -> Option<Decimal> {
        match self {
            Outcome::Balance(balance) => Some(*balance),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::TransactionComplete => write!(f, "Transaction complete"),
            Outcome::InsufficientFunds => write!(f, "Insufficient funds"),
            Outcome::BalanceLimitExceeded => write!(f, "Balance limit exceeded"),
            Outcome::Balance(balance) => write!(f, "{}", balance),
        }
    }
}

/// Shared transition function for both the struct handle and the closure form.
fn apply(balance: &mut Decimal, action: Action) -> Outcome {
    tracing::debug!(
        action = action.as_str(),
        amount = ?action.amount().map(|a| a.value()),
        "dispatch"
    );

    match action {
        Action::Deposit(amount) => match balance.checked_add(amount.value()) {
            Some(updated) => {
                *balance = updated;
                Outcome::TransactionComplete
            }
            None => {
                tracing::warn!(requested = %amount, "Deposit refused: balance limit exceeded");
                Outcome::BalanceLimitExceeded
            }
        },
        Action::Withdraw(amount) => {
            if amount.value() <= *balance {
                *balance -= amount.value();
                Outcome::TransactionComplete
            } else {
                tracing::warn!(requested = %amount, "Withdrawal refused: insufficient funds");
                Outcome::InsufficientFunds
            }
        }
        Action::Balance => Outcome::Balance(*balance),
    }
}

/// Account handle with a private balance.
///
/// Not `Clone`: the balance has exactly one owner.
pub struct Account {
    balance: Decimal,
}

impl Account {
    /// Open an account; a negative opening balance is rejected
    pub fn new(initial_balance: Decimal) -> CoreResult<Self> {
        let initial = Amount::new(initial_balance)?;
        Ok(Self {
            balance: initial.value(),
        })
    }

    /// The single entry point for reading or changing the balance
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        apply(&mut self.balance, action)
    }

    /// Dispatch a sequence of actions, collecting every outcome
    pub fn dispatch_all<I>(&mut self, actions: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().map(|action| self.dispatch(action)).collect()
    }

    /// Turn the handle into a plain callable
    pub fn into_closure(mut self) -> impl FnMut(Action) -> Outcome {
        move |action| self.dispatch(action)
    }
}

// Keep the balance out of debug output too.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account").finish_non_exhaustive()
    }
}

/// Open an account handle with `initial_balance`.
pub fn create_account(initial_balance: Decimal) -> CoreResult<Account> {
    Account::new(initial_balance)
}

/// The same handle as a `move` closure over a local balance.
pub fn account_closure(initial_balance: Decimal) -> CoreResult<impl FnMut(Action) -> Outcome> {
    let mut balance = Amount::new(initial_balance)?.value();
    Ok(move |action| apply(&mut balance, action))
}
