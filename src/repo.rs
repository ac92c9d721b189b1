// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed accessors over the key-value store: one get/save pair per
//! persisted collection, default-category seeding, and the bulk reset.

use crate::db::{Store, StoreError};
use crate::models::{Account, Category, DEFAULT_EMOJI, DEFAULT_GOAL, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

pub const ACCOUNTS_KEY: &str = "user_accounts";
pub const INCOME_CATEGORIES_KEY: &str = "income_categories";
pub const EXPENSE_CATEGORIES_KEY: &str = "expense_categories";
pub const TRANSACTIONS_KEY: &str = "user_transactions";
pub const GOAL_KEY: &str = "user_budget";

/// Decodes the value under `key`, falling back to the type's default
/// when the key is absent or its value no longer parses. The fallback
/// is logged, not raised: a damaged value must never take the caller
/// down with it. Store I/O errors still propagate.
fn read_or_default<T: DeserializeOwned + Default>(
    store: &Store,
    key: &'static str,
) -> Result<T, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(key, %err, "malformed value in store, using default");
            Ok(T::default())
        }
    }
}

fn write_json<T: Serialize>(store: &Store, key: &'static str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
    store.set(key, &raw)
}

// ===== Transactions =====

/// Stored transaction history, newest first (inserts prepend).
pub fn transactions(store: &Store) -> Result<Vec<Transaction>, StoreError> {
    read_or_default(store, TRANSACTIONS_KEY)
}

/// Overwrites the whole transaction collection.
pub fn save_transactions(store: &Store, transactions: &[Transaction]) -> Result<(), StoreError> {
    write_json(store, TRANSACTIONS_KEY, &transactions)
}

// ===== Accounts =====

/// Accounts as stored, with the display glyph back-filled on records
/// that predate the emoji field. The stored value stays as-is until the
/// next explicit save.
pub fn accounts(store: &Store) -> Result<Vec<Account>, StoreError> {
    let mut accounts: Vec<Account> = read_or_default(store, ACCOUNTS_KEY)?;
    for account in &mut accounts {
        if account.emoji.is_empty() {
            account.emoji = DEFAULT_EMOJI.to_string();
        }
    }
    Ok(accounts)
}

pub fn save_accounts(store: &Store, accounts: &[Account]) -> Result<(), StoreError> {
    write_json(store, ACCOUNTS_KEY, &accounts)
}

// ===== Categories =====

pub fn income_categories(store: &Store) -> Result<Vec<Category>, StoreError> {
    read_or_default(store, INCOME_CATEGORIES_KEY)
}

pub fn expense_categories(store: &Store) -> Result<Vec<Category>, StoreError> {
    read_or_default(store, EXPENSE_CATEGORIES_KEY)
}

pub fn save_income_categories(store: &Store, categories: &[Category]) -> Result<(), StoreError> {
    write_json(store, INCOME_CATEGORIES_KEY, &categories)
}

pub fn save_expense_categories(store: &Store, categories: &[Category]) -> Result<(), StoreError> {
    write_json(store, EXPENSE_CATEGORIES_KEY, &categories)
}

/// Seeds each category collection with its stock entries. Only an empty
/// collection is touched, so repeated calls are no-ops.
pub fn init_default_categories(store: &Store) -> Result<(), StoreError> {
    if income_categories(store)?.is_empty() {
        let defaults = [
            Category {
                id: "salary".into(),
                name: "Salary".into(),
            },
            Category {
                id: "freelance".into(),
                name: "Freelance".into(),
            },
        ];
        save_income_categories(store, &defaults)?;
    }
    if expense_categories(store)?.is_empty() {
        let defaults = [
            Category {
                id: "food".into(),
                name: "Food".into(),
            },
            Category {
                id: "transport".into(),
                name: "Transport".into(),
            },
        ];
        save_expense_categories(store, &defaults)?;
    }
    Ok(())
}

// ===== Goal amount =====

/// Target total balance, or the stock default when none was ever set.
pub fn goal_amount(store: &Store) -> Result<Decimal, StoreError> {
    let Some(raw) = store.get(GOAL_KEY)? else {
        return Ok(*DEFAULT_GOAL);
    };
    match raw.parse::<Decimal>() {
        Ok(amount) => Ok(amount),
        Err(err) => {
            warn!(key = GOAL_KEY, %err, "malformed goal amount, using default");
            Ok(*DEFAULT_GOAL)
        }
    }
}

/// Persists the goal amount, stored as plain text under its own key.
pub fn set_goal_amount(store: &Store, amount: Decimal) -> Result<(), StoreError> {
    store.set(GOAL_KEY, &amount.to_string())
}

// ===== Bulk reset =====

/// Removes the account, category, and transaction collections. The
/// goal amount key is not part of the reset.
pub fn clear_all_data(store: &Store) -> Result<(), StoreError> {
    for key in [
        ACCOUNTS_KEY,
        INCOME_CATEGORIES_KEY,
        EXPENSE_CATEGORIES_KEY,
        TRANSACTIONS_KEY,
    ] {
        store.remove(key)?;
    }
    Ok(())
}
