// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::repo;
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        println!("This deletes all accounts, categories, and transactions.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }
    repo::clear_all_data(store)?;
    println!("✅ All data deleted (the goal amount is kept)");
    Ok(())
}
