// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::models::{Transaction, TxKind};
use pocketledger::stats;
use rust_decimal::Decimal;

fn tx(id: &str, kind: TxKind, amount: i64, category: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        account_id: None,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("t1", TxKind::Income, 100, "Salary", "2024-01-01"),
        tx("t2", TxKind::Expense, 30, "Food", "2024-01-01"),
        tx("t3", TxKind::Income, 50, "Freelance", "2024-01-02"),
    ]
}

#[test]
fn balance_matches_scenario() {
    assert_eq!(stats::total_balance(&sample()), Decimal::from(120));
}

#[test]
fn balance_is_order_independent() {
    let forward = sample();
    let mut reversed = sample();
    reversed.reverse();
    assert_eq!(
        stats::total_balance(&forward),
        stats::total_balance(&reversed)
    );
}

#[test]
fn daily_totals_match_scenario() {
    let totals = stats::daily_totals(&sample());
    assert_eq!(totals.len(), 2);
    let jan1 = NaiveDate::parse_from_str("2024-01-01", "%Y-%m-%d").unwrap();
    let jan2 = NaiveDate::parse_from_str("2024-01-02", "%Y-%m-%d").unwrap();
    assert_eq!(totals.get(&jan1), Some(&Decimal::from(70)));
    assert_eq!(totals.get(&jan2), Some(&Decimal::from(50)));
}

#[test]
fn daily_totals_sum_to_balance() {
    let transactions = sample();
    let summed: Decimal = stats::daily_totals(&transactions).values().copied().sum();
    assert_eq!(summed, stats::total_balance(&transactions));
}

#[test]
fn daily_total_for_matches_map_entry() {
    let transactions = sample();
    let jan1 = NaiveDate::parse_from_str("2024-01-01", "%Y-%m-%d").unwrap();
    let totals = stats::daily_totals(&transactions);
    assert_eq!(
        stats::daily_total_for(&transactions, jan1),
        *totals.get(&jan1).unwrap()
    );
}

#[test]
fn daily_total_for_absent_date_is_zero() {
    let feb1 = NaiveDate::parse_from_str("2024-02-01", "%Y-%m-%d").unwrap();
    assert_eq!(stats::daily_total_for(&sample(), feb1), Decimal::ZERO);
}

#[test]
fn empty_history_yields_zero_everything() {
    let none: Vec<Transaction> = Vec::new();
    assert_eq!(stats::total_balance(&none), Decimal::ZERO);
    assert!(stats::daily_totals(&none).is_empty());
}

#[test]
fn goal_progress_scenario() {
    assert_eq!(
        stats::goal_progress(Decimal::from(120), Decimal::from(200)),
        Decimal::from(60)
    );
}

#[test]
fn goal_progress_clamps_at_one_hundred() {
    assert_eq!(
        stats::goal_progress(Decimal::from(250), Decimal::from(200)),
        Decimal::from(100)
    );
}

#[test]
fn negative_balance_gives_negative_progress() {
    // Only the upper bound is clamped.
    assert_eq!(
        stats::goal_progress(Decimal::from(-50), Decimal::from(200)),
        Decimal::from(-25)
    );
}
