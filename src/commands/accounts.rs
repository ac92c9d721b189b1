// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::utils::{fmt_money, pretty_table};
use crate::wallet::Wallet;
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let emoji = sub.get_one::<String>("emoji").unwrap();
            let mut wallet = Wallet::load(store)?;
            let id = wallet.add(store, name, emoji)?;
            println!("Added account '{}' {} (id {})", name, emoji, id);
        }
        Some(("list", _)) => {
            let wallet = Wallet::load(store)?;
            let data = wallet
                .accounts()
                .iter()
                .map(|a| {
                    vec![
                        a.id.clone(),
                        a.emoji.clone(),
                        a.name.clone(),
                        fmt_money(&a.balance),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "", "Name", "Balance"], data));
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let mut wallet = Wallet::load(store)?;
            wallet.remove(store, id)?;
            println!("Removed account '{}'", id);
        }
        Some(("set-emoji", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let emoji = sub.get_one::<String>("emoji").unwrap();
            let mut wallet = Wallet::load(store)?;
            wallet.set_emoji(store, id, emoji)?;
            println!("Account '{}' now shows {}", id, emoji);
        }
        _ => {}
    }
    Ok(())
}
