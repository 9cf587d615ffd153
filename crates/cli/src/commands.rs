//! Subcommand implementations

use anyhow::{Context, Result};
use closure_kit_core::{
    create_account, make_button_click_handler, make_power, Action, Button, KitConfig, Logger,
    Outcome,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Serialize)]
struct Step {
    action: String,
    outcome: Outcome,
    message: String,
}

/// Parse every op up front so a typo aborts before any state changes.
fn parse_ops(ops: &[String]) -> Result<Vec<Action>> {
    ops.iter()
        .map(|op| {
            op.parse::<Action>()
                .with_context(|| format!("invalid action '{}'", op))
        })
        .collect()
}

pub fn account(initial: Decimal, ops: &[String], json: bool) -> Result<()> {
    let actions = parse_ops(ops)?;
    let mut account = create_account(initial).context("cannot open account")?;
    tracing::info!(initial = %initial, actions = actions.len(), "Running account scenario");

    let steps: Vec<Step> = actions
        .into_iter()
        .map(|action| {
            let outcome = account.dispatch(action);
            Step {
                action: action.to_string(),
                outcome,
                message: outcome.to_string(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            println!("{:<20} ➜ {}", step.action, step.message);
        }
    }
    Ok(())
}

pub fn power(exponent: i32, values: &[f64], json: bool) -> Result<()> {
    let power = make_power(exponent);
    let results: Vec<f64> = values.iter().map(|&x| power(x)).collect();

    if json {
        let report = json!({ "exponent": exponent, "inputs": values, "results": results });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (x, y) in values.iter().zip(&results) {
            println!("{}^{} = {}", x, exponent, y);
        }
    }
    Ok(())
}

pub fn greet(username: &str, json: bool) -> Result<()> {
    let mut button = Button::new("login");
    button.on_click(make_button_click_handler(username));
    let messages = button.click();

    if json {
        let report = json!({ "button": button.label(), "messages": messages });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for message in messages {
            println!("{}", message);
        }
    }
    Ok(())
}

pub fn add(label: &str, a: i64, b: i64, json: bool) -> Result<()> {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink_lines = Rc::clone(&lines);
    let logger = Logger::with_sink(label, move |line: &str| {
        tracing::debug!(target: "closure_kit::decorator", "{}", line);
        sink_lines.borrow_mut().push(line.to_string());
    });

    let add = logger.decorate("add", |(a, b): (i64, i64)| a.wrapping_add(b));
    let result = add((a, b));

    let lines = lines.borrow();
    if json {
        let report = json!({ "result": result, "log": *lines });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in lines.iter() {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn demo(config: &KitConfig) -> Result<()> {
    println!("=== Data hiding ===");
    let ops: Vec<String> = ["balance", "deposit:500", "balance", "withdraw:2000"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    account(config.account.initial_balance, &ops, false)?;

    println!("\n=== Callback ===");
    greet(&config.greeting.username, false)?;

    println!("\n=== Decorator ===");
    add(&config.logger.label, 3, 4, false)?;

    println!("\n=== Factory ===");
    for case in &config.power.cases {
        let power = make_power(case.exponent);
        println!("power_{}({}) = {}", case.exponent, case.input, power(case.input));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ops_stops_on_first_bad_op() {
        let ops = vec!["deposit:5".to_string(), "refund:5".to_string()];
        let err = parse_ops(&ops).unwrap_err();
        assert!(err.to_string().contains("refund:5"));
    }

    #[test]
    fn test_parse_ops() {
        let ops = vec!["deposit:5".to_string(), "balance".to_string()];
        let actions = parse_ops(&ops).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1], Action::Balance);
    }

    #[test]
    fn test_account_rejects_negative_opening_balance() {
        assert!(account(Decimal::from(-10), &[], false).is_err());
    }

    #[test]
    fn test_account_runs_ops() {
        let ops = vec!["deposit:500".to_string(), "withdraw:2000".to_string()];
        assert!(account(Decimal::from(1000), &ops, false).is_ok());
        assert!(account(Decimal::from(1000), &ops, true).is_ok());
    }

    #[test]
    fn test_account_overflowing_deposit_does_not_fail() {
        let ops = vec!["deposit:1".to_string(), "balance".to_string()];
        assert!(account(Decimal::MAX, &ops, false).is_ok());
    }

    #[test]
    fn test_greet() {
        assert!(greet("Alice", false).is_ok());
        assert!(greet("Alice", true).is_ok());
    }

    #[test]
    fn test_greet_with_borrowed_name() {
        let name = String::from("Eve");
        assert!(greet(name.as_str(), false).is_ok());
    }

    #[test]
    fn test_add() {
        assert!(add("DEBUG", 3, 4, false).is_ok());
        assert!(add("DEBUG", i64::MAX, 1, true).is_ok());
    }

    #[test]
    fn test_power() {
        assert!(power(2, &[4.0, -1.5], false).is_ok());
        assert!(power(-1, &[2.0], true).is_ok());
    }

    #[test]
    fn test_demo_with_defaults() {
        assert!(demo(&KitConfig::default()).is_ok());
    }

    #[test]
    fn test_demo_with_custom_power_cases() {
        let config = KitConfig::load_str(
            "[[power.cases]]\nexponent = 5\ninput = 2.0\n\n[[power.cases]]\nexponent = 0\ninput = 9.0\n",
        )
        .unwrap();
        assert!(demo(&config).is_ok());
    }
}
