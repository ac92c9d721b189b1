// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Glyph assigned to accounts stored before the emoji field existed.
pub const DEFAULT_EMOJI: &str = "💳";

/// Goal amount reported until the user sets one.
pub static DEFAULT_GOAL: Lazy<Decimal> = Lazy::new(|| Decimal::from(1_000_000));

/// Direction of a money movement. Amounts are stored unsigned; the kind
/// alone decides the sign of their contribution to any total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Unsigned magnitude; must be non-negative.
    pub amount: Decimal,
    /// Category name as entered. Not a foreign key: deleting the
    /// category leaves this reference in place.
    pub category: String,
    pub date: NaiveDate,
    /// Account id, if one was chosen. Not a foreign key either.
    #[serde(rename = "accountId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl Transaction {
    /// Signed contribution to a running total: `+amount` for income,
    /// `-amount` for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxKind::Income => self.amount,
            TxKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Independently stored figure, never recomputed from the
    /// transactions that reference this account.
    pub balance: Decimal,
    /// Records written before this field existed decode to an empty
    /// string; reads back-fill it with `DEFAULT_EMOJI`.
    #[serde(default)]
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}
