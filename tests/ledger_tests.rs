// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::db::Store;
use pocketledger::ledger::Ledger;
use pocketledger::models::{Transaction, TxKind};
use pocketledger::repo;
use rust_decimal::Decimal;

fn store() -> Store {
    Store::open_in_memory().unwrap()
}

fn tx(id: &str, kind: TxKind, amount: i64, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount: Decimal::from(amount),
        category: "Food".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        account_id: None,
    }
}

#[test]
fn add_prepends_newest_first() {
    let store = store();
    let mut ledger = Ledger::load(&store);
    ledger
        .add(&store, tx("t1", TxKind::Income, 100, "2025-01-01"))
        .unwrap();
    ledger
        .add(&store, tx("t2", TxKind::Expense, 30, "2025-01-02"))
        .unwrap();

    assert_eq!(ledger.transactions().len(), 2);
    assert_eq!(ledger.transactions()[0].id, "t2");
    assert_eq!(ledger.transactions()[1].id, "t1");
}

#[test]
fn add_converges_cache_and_store() {
    let store = store();
    let mut ledger = Ledger::load(&store);
    ledger
        .add(&store, tx("t1", TxKind::Income, 100, "2025-01-01"))
        .unwrap();

    let persisted = repo::transactions(&store).unwrap();
    assert_eq!(persisted, ledger.transactions());
}

#[test]
fn add_then_remove_restores_prior_sequence() {
    let store = store();
    let mut ledger = Ledger::load(&store);
    ledger
        .add(&store, tx("t1", TxKind::Income, 100, "2025-01-01"))
        .unwrap();
    ledger
        .add(&store, tx("t2", TxKind::Expense, 30, "2025-01-02"))
        .unwrap();
    let before: Vec<Transaction> = ledger.transactions().to_vec();

    ledger
        .add(&store, tx("t3", TxKind::Income, 50, "2025-01-03"))
        .unwrap();
    ledger.remove(&store, "t3").unwrap();

    assert_eq!(ledger.transactions(), before);
    assert_eq!(repo::transactions(&store).unwrap(), before);
}

#[test]
fn remove_absent_id_is_noop() {
    let store = store();
    let mut ledger = Ledger::load(&store);
    ledger
        .add(&store, tx("t1", TxKind::Income, 100, "2025-01-01"))
        .unwrap();
    let before: Vec<Transaction> = ledger.transactions().to_vec();

    ledger.remove(&store, "no-such-id").unwrap();

    assert_eq!(ledger.transactions(), before);
    assert_eq!(repo::transactions(&store).unwrap(), before);
}

#[test]
fn load_reads_persisted_state() {
    let store = store();
    let seeded = vec![
        tx("t2", TxKind::Expense, 30, "2025-01-02"),
        tx("t1", TxKind::Income, 100, "2025-01-01"),
    ];
    repo::save_transactions(&store, &seeded).unwrap();

    let ledger = Ledger::load(&store);
    assert_eq!(ledger.transactions(), seeded);
}

#[test]
fn reload_replaces_cache_with_store_contents() {
    let store = store();
    let mut ledger = Ledger::load(&store);
    ledger
        .add(&store, tx("t1", TxKind::Income, 100, "2025-01-01"))
        .unwrap();

    // Another surface rewrites the collection underneath the cache.
    let rewritten = vec![tx("t9", TxKind::Expense, 5, "2025-02-01")];
    repo::save_transactions(&store, &rewritten).unwrap();

    ledger.reload(&store);
    assert_eq!(ledger.transactions(), rewritten);
}
