// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::db::Store;
use pocketledger::ledger::Ledger;
use pocketledger::models::{Transaction, TxKind};
use pocketledger::{cli, commands::transactions};
use rust_decimal::Decimal;

fn setup() -> (Store, Ledger) {
    let store = Store::open_in_memory().unwrap();
    let mut ledger = Ledger::load(&store);
    for (i, (category, month)) in [("Food", "01"), ("Food", "01"), ("Transport", "02")]
        .into_iter()
        .enumerate()
    {
        ledger
            .add(
                &store,
                Transaction {
                    id: format!("t{}", i + 1),
                    kind: TxKind::Expense,
                    amount: Decimal::from(10),
                    category: category.to_string(),
                    date: NaiveDate::parse_from_str(
                        &format!("2025-{}-0{}", month, i + 1),
                        "%Y-%m-%d",
                    )
                    .unwrap(),
                    account_id: None,
                },
            )
            .unwrap();
    }
    (store, ledger)
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args.iter().copied());
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn list_limit_respected() {
    let (_store, ledger) = setup();
    let list_m = list_matches(&["pocketledger", "tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(&ledger, &list_m);
    assert_eq!(rows.len(), 2);
    // Inserts prepend, so the newest transaction leads.
    assert_eq!(rows[0].date, "2025-02-03");
}

#[test]
fn list_month_filter() {
    let (_store, ledger) = setup();
    let list_m = list_matches(&["pocketledger", "tx", "list", "--month", "2025-01"]);
    let rows = transactions::query_rows(&ledger, &list_m);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.date.starts_with("2025-01")));
}

#[test]
fn list_category_filter() {
    let (_store, ledger) = setup();
    let list_m = list_matches(&["pocketledger", "tx", "list", "--category", "Transport"]);
    let rows = transactions::query_rows(&ledger, &list_m);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "t3");
}
