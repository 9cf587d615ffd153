//! Integration tests for account handles: balance arithmetic over long
//! action sequences, the non-negative invariant, and handle isolation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use closure_kit_core::{account_closure, create_account, Action, Outcome};

/// Deterministic mixed sequence of deposits and withdrawals
fn scripted_actions() -> Vec<Action> {
    let amounts = [
        dec!(120), dec!(75.5), dec!(3000), dec!(0), dec!(19.99), dec!(400), dec!(1),
        dec!(250), dec!(999.01), dec!(60),
    ];
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| {
            if i % 3 == 1 {
                Action::deposit(*amount).unwrap()
            } else {
                Action::withdraw(*amount).unwrap()
            }
        })
        .collect()
}

#[test]
fn balance_equals_initial_plus_deposits_minus_accepted_withdrawals() {
    let initial = dec!(500);
    let mut account = create_account(initial).unwrap();

    let mut deposits = Decimal::ZERO;
    let mut accepted_withdrawals = Decimal::ZERO;

    for action in scripted_actions() {
        let outcome = account.dispatch(action);
        match (action, outcome) {
            (Action::Deposit(amount), Outcome::TransactionComplete) => deposits += amount.value(),
            (Action::Withdraw(amount), Outcome::TransactionComplete) => {
                accepted_withdrawals += amount.value()
            }
            (Action::Withdraw(_), Outcome::InsufficientFunds) => {}
            other => panic!("unexpected pair: {:?}", other),
        }
    }

    assert_eq!(
        account.dispatch(Action::Balance),
        Outcome::Balance(initial + deposits - accepted_withdrawals)
    );
}

#[test]
fn balance_never_goes_negative() {
    let mut account = create_account(dec!(10)).unwrap();

    for action in scripted_actions() {
        account.dispatch(action);
        let balance = account.dispatch(Action::Balance).as_balance().unwrap();
        assert!(balance >= Decimal::ZERO, "balance went negative: {}", balance);
    }
}

#[test]
fn refused_withdrawal_leaves_balance_untouched() {
    let mut account = create_account(dec!(100)).unwrap();
    let outcome = account.dispatch(Action::withdraw(dec!(100.01)).unwrap());

    assert_eq!(outcome, Outcome::InsufficientFunds);
    assert!(!outcome.is_success());
    assert_eq!(account.dispatch(Action::Balance), Outcome::Balance(dec!(100)));
}

#[test]
fn independent_handles_do_not_share_state() {
    let mut first = create_account(dec!(1000)).unwrap();
    let mut second = create_account(dec!(1000)).unwrap();

    first.dispatch(Action::deposit(dec!(500)).unwrap());
    second.dispatch(Action::withdraw(dec!(1000)).unwrap());

    assert_eq!(first.dispatch(Action::Balance), Outcome::Balance(dec!(1500)));
    assert_eq!(second.dispatch(Action::Balance), Outcome::Balance(dec!(0)));
}

#[test]
fn closure_handles_do_not_share_state() {
    let mut first = account_closure(dec!(5)).unwrap();
    let mut second = account_closure(dec!(5)).unwrap();

    first(Action::deposit(dec!(5)).unwrap());

    assert_eq!(first(Action::Balance), Outcome::Balance(dec!(10)));
    assert_eq!(second(Action::Balance), Outcome::Balance(dec!(5)));
}

#[test]
fn dispatch_all_reports_every_outcome() {
    let mut account = create_account(dec!(1000)).unwrap();
    let actions: Vec<Action> = ["balance", "deposit:500", "withdraw:2000", "withdraw:1500", "balance"]
        .iter()
        .map(|op| op.parse().unwrap())
        .collect();

    let rendered: Vec<String> = account
        .dispatch_all(actions)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        rendered,
        vec![
            "1000",
            "Transaction complete",
            "Insufficient funds",
            "Transaction complete",
            "0",
        ]
    );
}

#[test]
fn deposit_past_the_limit_is_refused_without_panicking() {
    let mut wallet = account_closure(Decimal::MAX).unwrap();

    let outcome = wallet(Action::deposit(dec!(1)).unwrap());

    assert_eq!(outcome, Outcome::BalanceLimitExceeded);
    assert_eq!(wallet(Action::Balance), Outcome::Balance(Decimal::MAX));
}
