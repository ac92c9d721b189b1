// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Account management: a local cache over the persisted account
//! collection, reconciled with the store on every mutation.

use crate::db::{Store, StoreError};
use crate::models::{Account, DEFAULT_EMOJI};
use crate::repo;
use chrono::Utc;
use rust_decimal::Decimal;

fn default_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "card".into(),
            name: "Card".into(),
            balance: Decimal::ZERO,
            emoji: "💳".into(),
        },
        Account {
            id: "cash".into(),
            name: "Cash".into(),
            balance: Decimal::ZERO,
            emoji: "💰".into(),
        },
        Account {
            id: "savings".into(),
            name: "Savings".into(),
            balance: Decimal::ZERO,
            emoji: "🏦".into(),
        },
    ]
}

#[derive(Debug, Default)]
pub struct Wallet {
    accounts: Vec<Account>,
}

impl Wallet {
    /// Loads the account collection, seeding the three stock accounts
    /// on the first empty read.
    pub fn load(store: &Store) -> Result<Wallet, StoreError> {
        let mut accounts = repo::accounts(store)?;
        if accounts.is_empty() {
            accounts = default_accounts();
            repo::save_accounts(store, &accounts)?;
        }
        Ok(Wallet { accounts })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Creates an account with a zero balance and a timestamp-derived
    /// id, appends it, and persists the collection. Returns the new id.
    pub fn add(&mut self, store: &Store, name: &str, emoji: &str) -> Result<String, StoreError> {
        let id = Utc::now().timestamp_millis().to_string();
        self.accounts.push(Account {
            id: id.clone(),
            name: name.to_string(),
            balance: Decimal::ZERO,
            emoji: if emoji.is_empty() {
                DEFAULT_EMOJI.to_string()
            } else {
                emoji.to_string()
            },
        });
        repo::save_accounts(store, &self.accounts)?;
        Ok(id)
    }

    /// Deletes by id and persists. Transactions referencing the account
    /// keep their reference; nothing cascades. An unknown id leaves the
    /// collection unchanged.
    pub fn remove(&mut self, store: &Store, id: &str) -> Result<(), StoreError> {
        self.accounts.retain(|a| a.id != id);
        repo::save_accounts(store, &self.accounts)
    }

    /// Swaps the display glyph on the matching account and persists.
    /// An unknown id is a no-op.
    pub fn set_emoji(&mut self, store: &Store, id: &str, emoji: &str) -> Result<(), StoreError> {
        for account in &mut self.accounts {
            if account.id == id {
                account.emoji = emoji.to_string();
            }
        }
        repo::save_accounts(store, &self.accounts)
    }
}
