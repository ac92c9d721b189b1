// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::CategoryBook;
use crate::db::Store;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::utils::{
    fmt_money, kind_label, maybe_print_json, parse_amount, parse_date, parse_kind, pretty_table,
};
use crate::wallet::Wallet;
use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let account_id = sub.get_one::<String>("account").cloned();

    let book = CategoryBook::load(store)?;
    if !book.list(kind).iter().any(|c| c.name == *category) {
        anyhow::bail!("Unknown {} category '{}'", kind_label(kind), category);
    }
    if let Some(ref id) = account_id {
        let wallet = Wallet::load(store)?;
        if wallet.get(id).is_none() {
            anyhow::bail!("Unknown account '{}'", id);
        }
    }

    let transaction = Transaction {
        id: Uuid::new_v4().to_string(),
        kind,
        amount,
        category: category.clone(),
        date,
        account_id,
    };
    let id = transaction.id.clone();
    let mut ledger = Ledger::load(store);
    ledger.add(store, transaction)?;
    println!(
        "Recorded {} {} in '{}' on {} (id {})",
        kind_label(kind),
        fmt_money(&amount),
        category,
        date,
        id
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = Ledger::load(store);
    let data = query_rows(&ledger, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.account.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Amount", "Category", "Account", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut ledger = Ledger::load(store);
    ledger.remove(store, id)?;
    println!("Removed transaction '{}'", id);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub account: String,
    pub id: String,
}

/// Cached sequence filtered for display: newest first, optionally
/// restricted to a month or category, truncated to a limit.
pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    let month = sub.get_one::<String>("month");
    let category = sub.get_one::<String>("category");

    let mut data: Vec<TransactionRow> = ledger
        .transactions()
        .iter()
        .filter(|t| match month {
            Some(m) => t.date.format("%Y-%m").to_string() == *m,
            None => true,
        })
        .filter(|t| match category {
            Some(c) => t.category == *c,
            None => true,
        })
        .map(|t| TransactionRow {
            date: t.date.to_string(),
            kind: kind_label(t.kind).to_string(),
            amount: fmt_money(&t.amount),
            category: t.category.clone(),
            account: t.account_id.clone().unwrap_or_default(),
            id: t.id.clone(),
        })
        .collect();

    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    data
}
