// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category management over the two disjoint collections: one list for
//! income labels, one for expense labels.

use crate::db::{Store, StoreError};
use crate::models::{Category, TxKind};
use crate::repo;

#[derive(Debug, Default)]
pub struct CategoryBook {
    income: Vec<Category>,
    expense: Vec<Category>,
}

impl CategoryBook {
    /// Loads both collections, seeding the stock categories on the
    /// first empty read.
    pub fn load(store: &Store) -> Result<CategoryBook, StoreError> {
        repo::init_default_categories(store)?;
        Ok(CategoryBook {
            income: repo::income_categories(store)?,
            expense: repo::expense_categories(store)?,
        })
    }

    pub fn income(&self) -> &[Category] {
        &self.income
    }

    pub fn expense(&self) -> &[Category] {
        &self.expense
    }

    pub fn list(&self, kind: TxKind) -> &[Category] {
        match kind {
            TxKind::Income => &self.income,
            TxKind::Expense => &self.expense,
        }
    }

    /// Appends a category (id supplied by the caller) to the collection
    /// for `kind` and persists that collection.
    pub fn add(&mut self, store: &Store, kind: TxKind, category: Category) -> Result<(), StoreError> {
        match kind {
            TxKind::Income => {
                self.income.push(category);
                repo::save_income_categories(store, &self.income)
            }
            TxKind::Expense => {
                self.expense.push(category);
                repo::save_expense_categories(store, &self.expense)
            }
        }
    }

    /// Deletes by id from the collection for `kind` and persists it.
    /// Transactions using the category name keep it; nothing cascades.
    pub fn remove(&mut self, store: &Store, kind: TxKind, id: &str) -> Result<(), StoreError> {
        match kind {
            TxKind::Income => {
                self.income.retain(|c| c.id != id);
                repo::save_income_categories(store, &self.income)
            }
            TxKind::Expense => {
                self.expense.retain(|c| c.id != id);
                repo::save_expense_categories(store, &self.expense)
            }
        }
    }
}
