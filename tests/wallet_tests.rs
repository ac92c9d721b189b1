// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::db::Store;
use pocketledger::models::{Transaction, TxKind};
use pocketledger::repo;
use pocketledger::wallet::Wallet;
use rust_decimal::Decimal;

fn store() -> Store {
    Store::open_in_memory().unwrap()
}

#[test]
fn first_load_seeds_stock_accounts_and_persists_them() {
    let store = store();
    let wallet = Wallet::load(&store).unwrap();

    let ids: Vec<&str> = wallet.accounts().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["card", "cash", "savings"]);
    assert!(wallet.accounts().iter().all(|a| a.balance == Decimal::ZERO));

    // Seeding writes through, so a second load sees the same rows.
    assert_eq!(repo::accounts(&store).unwrap().len(), 3);
}

#[test]
fn second_load_does_not_reseed() {
    let store = store();
    let mut wallet = Wallet::load(&store).unwrap();
    wallet.remove(&store, "card").unwrap();

    let reloaded = Wallet::load(&store).unwrap();
    assert_eq!(reloaded.accounts().len(), 2);
}

#[test]
fn add_appends_and_persists() {
    let store = store();
    let mut wallet = Wallet::load(&store).unwrap();
    let id = wallet.add(&store, "Brokerage", "📈").unwrap();

    assert!(!id.is_empty());
    assert_eq!(wallet.accounts().len(), 4);
    let persisted = repo::accounts(&store).unwrap();
    assert_eq!(persisted.len(), 4);
    assert_eq!(persisted[3].name, "Brokerage");
    assert_eq!(persisted[3].emoji, "📈");
}

#[test]
fn set_emoji_updates_only_the_matching_account() {
    let store = store();
    let mut wallet = Wallet::load(&store).unwrap();
    wallet.set_emoji(&store, "cash", "🚀").unwrap();

    let persisted = repo::accounts(&store).unwrap();
    assert_eq!(wallet.get("cash").unwrap().emoji, "🚀");
    assert_eq!(persisted.iter().find(|a| a.id == "cash").unwrap().emoji, "🚀");
    assert_eq!(persisted.iter().find(|a| a.id == "card").unwrap().emoji, "💳");
}

#[test]
fn set_emoji_unknown_id_is_noop() {
    let store = store();
    let mut wallet = Wallet::load(&store).unwrap();
    let before = repo::accounts(&store).unwrap();

    wallet.set_emoji(&store, "no-such-account", "🚀").unwrap();

    assert_eq!(repo::accounts(&store).unwrap(), before);
}

#[test]
fn remove_does_not_cascade_to_transactions() {
    let store = store();
    let mut wallet = Wallet::load(&store).unwrap();
    repo::save_transactions(
        &store,
        &[Transaction {
            id: "t1".into(),
            kind: TxKind::Expense,
            amount: Decimal::from(30),
            category: "Food".into(),
            date: NaiveDate::parse_from_str("2025-01-01", "%Y-%m-%d").unwrap(),
            account_id: Some("cash".into()),
        }],
    )
    .unwrap();

    wallet.remove(&store, "cash").unwrap();

    assert!(wallet.get("cash").is_none());
    let transactions = repo::transactions(&store).unwrap();
    assert_eq!(transactions[0].account_id.as_deref(), Some("cash"));
}
