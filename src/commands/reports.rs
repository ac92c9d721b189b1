// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::ledger::Ledger;
use crate::repo;
use crate::stats;
use crate::utils::{fmt_money, fmt_signed, maybe_print_json, parse_date, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balance", sub)) => balance(store, sub)?,
        Some(("calendar", sub)) => calendar(store, sub)?,
        Some(("day", sub)) => day(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct BalanceReport {
    balance: String,
    goal: String,
    progress_pct: String,
}

fn balance(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = Ledger::load(store);
    let total = stats::total_balance(ledger.transactions());
    let goal = repo::goal_amount(store)?;
    let progress = stats::goal_progress(total, goal);

    let report = BalanceReport {
        balance: fmt_money(&total),
        goal: fmt_money(&goal),
        progress_pct: progress.round_dp(1).to_string(),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        println!("Total balance: {}", report.balance);
        println!("Goal: {} ({}%)", report.goal, report.progress_pct);
    }
    Ok(())
}

#[derive(Serialize)]
struct DayRow {
    date: String,
    net: String,
}

fn calendar(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };

    let ledger = Ledger::load(store);
    let totals = stats::daily_totals(ledger.transactions());
    let data: Vec<DayRow> = totals
        .iter()
        .filter(|(date, _)| match &month {
            Some(m) => date.format("%Y-%m").to_string() == *m,
            None => true,
        })
        .map(|(date, net)| DayRow {
            date: date.to_string(),
            net: fmt_signed(net),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data.iter().map(|r| vec![r.date.clone(), r.net.clone()]).collect();
        println!("{}", pretty_table(&["Date", "Net"], rows));
    }
    Ok(())
}

fn day(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let ledger = Ledger::load(store);
    let total = stats::daily_total_for(ledger.transactions(), date);
    println!("Total for {}: {}", date, fmt_signed(&total));
    Ok(())
}
