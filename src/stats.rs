// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures over a transaction history. Every function here is a
//! pure function of its inputs; none of them touch the store.

use crate::models::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Net balance across the whole history: income counts positive,
/// expense negative. Order-independent.
pub fn total_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Net amount per calendar day. Only days that actually have
/// transactions appear; there is no zero-filling.
pub fn daily_totals(transactions: &[Transaction]) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals = BTreeMap::new();
    for t in transactions {
        *totals.entry(t.date).or_insert(Decimal::ZERO) += t.signed_amount();
    }
    totals
}

/// Net amount for one calendar day, zero when nothing was recorded.
pub fn daily_total_for(transactions: &[Transaction], date: NaiveDate) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.date == date)
        .map(|t| t.signed_amount())
        .sum()
}

/// Share of the goal covered by the balance, as a percentage capped at
/// 100 for display. A negative balance yields a negative share; there
/// is no floor clamp. `goal_amount` must be positive, which the entry
/// points that set it enforce.
pub fn goal_progress(total_balance: Decimal, goal_amount: Decimal) -> Decimal {
    let pct = total_balance / goal_amount * Decimal::ONE_HUNDRED;
    pct.min(Decimal::ONE_HUNDRED)
}
