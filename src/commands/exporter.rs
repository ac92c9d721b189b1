// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::utils::kind_label;
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let ledger = Ledger::load(store);
    let mut transactions: Vec<Transaction> = ledger.transactions().to_vec();
    // Stored order is newest-first; exports read better oldest-first.
    transactions.sort_by_key(|t| t.date);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "type", "amount", "category", "account", "id"])?;
            for t in &transactions {
                wtr.write_record([
                    t.date.to_string(),
                    kind_label(t.kind).to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.account_id.clone().unwrap_or_default(),
                    t.id.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in &transactions {
                items.push(json!({
                    "date": t.date.to_string(),
                    "type": kind_label(t.kind),
                    "amount": t.amount.to_string(),
                    "category": t.category.clone(),
                    "account": t.account_id.clone(),
                    "id": t.id.clone(),
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}
