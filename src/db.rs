// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketledger", "pocketledger"));

/// Failures crossing the key-value store boundary. Writes surface these
/// to the caller; reads of absent or damaged values do not (see
/// `repo`), only genuine I/O does.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read key '{key}'")]
    Read {
        key: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to write key '{key}'")]
    Write {
        key: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to remove key '{key}'")]
    Remove {
        key: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to encode value for key '{key}'")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pocketledger.sqlite"))
}

/// Durable string-to-string map. Every value is written whole: one
/// UPSERT per key, so the store never holds a partial value.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open_or_init() -> Result<Store> {
        let path = db_path()?;
        let conn =
            Connection::open(&path).with_context(|| format!("Open store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    pub fn open_in_memory() -> Result<Store> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    /// Raw value under a key, or `None` if the key was never written.
    pub fn get(&self, key: &'static str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .map_err(|source| StoreError::Read { key, source })
    }

    /// Replaces the whole value under a key.
    pub fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO kv(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|source| StoreError::Write { key, source })
    }

    /// Drops a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &'static str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key=?1", params![key])
            .map(|_| ())
            .map_err(|source| StoreError::Remove { key, source })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
