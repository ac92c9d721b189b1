// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Process-lifetime cache of the transaction history, kept in step with
//! the store by every mutating call.

use crate::db::{Store, StoreError};
use crate::models::Transaction;
use crate::repo;
use tracing::warn;

/// In-memory view of the recorded transactions, newest first.
///
/// After a successful `add` or `remove` the cached sequence and the
/// persisted sequence are equal. When a save fails the cache keeps the
/// new state and the caller gets the error; the next `reload` converges
/// back to whatever the store holds.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn load(store: &Store) -> Ledger {
        let mut ledger = Ledger::default();
        ledger.reload(store);
        ledger
    }

    /// Replaces the cached sequence with the persisted one. On a read
    /// failure the cache is left as it was: stale, but usable.
    pub fn reload(&mut self, store: &Store) {
        match repo::transactions(store) {
            Ok(transactions) => self.transactions = transactions,
            Err(err) => warn!(%err, "could not reload transactions, keeping cached view"),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Records a transaction at the head of the sequence and persists
    /// the whole updated history. The id comes from the caller; no
    /// uniqueness check happens here.
    pub fn add(&mut self, store: &Store, transaction: Transaction) -> Result<(), StoreError> {
        self.transactions.insert(0, transaction);
        repo::save_transactions(store, &self.transactions)
    }

    /// Drops the transaction with the given id, if any, and persists
    /// the result. An unknown id leaves the sequence unchanged and is
    /// not an error.
    pub fn remove(&mut self, store: &Store, id: &str) -> Result<(), StoreError> {
        self.transactions.retain(|t| t.id != id);
        repo::save_transactions(store, &self.transactions)
    }
}
