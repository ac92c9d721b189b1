// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::ledger::Ledger;
use crate::models::TxKind;
use crate::repo;
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashSet;

/// None of the stored references are foreign keys, so deletions can
/// leave transactions pointing at accounts or categories that no longer
/// exist, and nothing stops two transactions from sharing an id. This
/// walks the history and reports each case.
pub fn handle(store: &Store) -> Result<()> {
    let ledger = Ledger::load(store);
    let accounts = repo::accounts(store)?;
    let income = repo::income_categories(store)?;
    let expense = repo::expense_categories(store)?;

    let mut rows = Vec::new();

    for t in ledger.transactions() {
        if let Some(ref id) = t.account_id {
            if !accounts.iter().any(|a| a.id == *id) {
                rows.push(vec![
                    "txn_account_missing".into(),
                    format!("{} -> {}", t.id, id),
                ]);
            }
        }
    }

    for t in ledger.transactions() {
        let known = match t.kind {
            TxKind::Income => &income,
            TxKind::Expense => &expense,
        };
        if !known.iter().any(|c| c.name == t.category) {
            rows.push(vec![
                "txn_category_missing".into(),
                format!("{} -> {}", t.id, t.category),
            ]);
        }
    }

    let mut seen = HashSet::new();
    for t in ledger.transactions() {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_txn_id".into(), t.id.clone()]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
