// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_parser(["income", "expense"])
        .required(true)
        .help("Which category collection")
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .version(crate_version!())
        .about("Personal budgeting: accounts, categories, a savings goal, and calendar spending views")
        .subcommand(Command::new("init").about("Initialize the local store and seed defaults"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").required(true).help("Account name"))
                        .arg(
                            Arg::new("emoji")
                                .long("emoji")
                                .default_value("💳")
                                .help("Display glyph"),
                        ),
                )
                .subcommand(Command::new("list").about("List accounts"))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account by id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("set-emoji")
                        .about("Change the display glyph of an account")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("emoji").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage income and expense categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(kind_arg())
                        .arg(Arg::new("name").required(true).help("Category name")),
                )
                .subcommand(Command::new("list").about("List both category collections"))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category by id")
                        .arg(kind_arg())
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Unsigned amount"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("account").long("account").help("Account id")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(Arg::new("category").long("category").help("Filter by category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goal")
                .subcommand(
                    Command::new("set")
                        .about("Set the goal amount")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(Command::new("show").about("Show balance, goal, and progress")),
        )
        .subcommand(
            Command::new("report")
                .about("Derived figures over the transaction history")
                .subcommand(json_flags(
                    Command::new("balance").about("Total balance across the history"),
                ))
                .subcommand(json_flags(
                    Command::new("calendar")
                        .about("Net amount per day")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM")),
                ))
                .subcommand(
                    Command::new("day")
                        .about("Net amount for one day")
                        .arg(Arg::new("date").required(true).help("YYYY-MM-DD")),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export the transaction history")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true).help("Output path")),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for dangling references"))
        .subcommand(
            Command::new("reset")
                .about("Delete all stored collections (the goal amount is kept)")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation"),
                ),
        )
}
