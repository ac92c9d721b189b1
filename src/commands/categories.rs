// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::CategoryBook;
use crate::db::Store;
use crate::models::Category;
use crate::utils::{kind_label, parse_kind, pretty_table};
use anyhow::Result;
use uuid::Uuid;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
            let name = sub.get_one::<String>("name").unwrap();
            let mut book = CategoryBook::load(store)?;
            book.add(
                store,
                kind,
                Category {
                    id: Uuid::new_v4().to_string(),
                    name: name.clone(),
                },
            )?;
            println!("Added {} category '{}'", kind_label(kind), name);
        }
        Some(("list", _)) => {
            let book = CategoryBook::load(store)?;
            let mut data = Vec::new();
            for c in book.income() {
                data.push(vec!["income".to_string(), c.id.clone(), c.name.clone()]);
            }
            for c in book.expense() {
                data.push(vec!["expense".to_string(), c.id.clone(), c.name.clone()]);
            }
            println!("{}", pretty_table(&["Kind", "Id", "Name"], data));
        }
        Some(("rm", sub)) => {
            let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
            let id = sub.get_one::<String>("id").unwrap();
            let mut book = CategoryBook::load(store)?;
            book.remove(store, kind, id)?;
            println!("Removed {} category '{}'", kind_label(kind), id);
        }
        _ => {}
    }
    Ok(())
}
