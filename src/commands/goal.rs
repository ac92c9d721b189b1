// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::ledger::Ledger;
use crate::repo;
use crate::stats;
use crate::utils::{fmt_money, parse_amount};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
            repo::set_goal_amount(store, amount)?;
            println!("Goal set to {}", fmt_money(&amount));
        }
        Some(("show", _)) => {
            let ledger = Ledger::load(store);
            let goal = repo::goal_amount(store)?;
            let balance = stats::total_balance(ledger.transactions());
            let progress = stats::goal_progress(balance, goal);
            println!(
                "Balance {} of goal {} ({}%)",
                fmt_money(&balance),
                fmt_money(&goal),
                progress.round_dp(1)
            );
        }
        _ => {}
    }
    Ok(())
}
