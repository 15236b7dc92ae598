// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
}

pub fn build_cli() -> Command {
    Command::new("moneyhub")
        .version(clap::crate_version!())
        .about("Personal finance analytics, savings goals, and transaction queries")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .env("MONEYHUB_CONFIG")
                .value_name("FILE")
                .help("Settings file (TOML)"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_name("DIR")
                .help("Directory holding transactions.json|csv and goals.json"),
        )
        .arg(
            Arg::new("transactions-file")
                .long("transactions")
                .global(true)
                .value_name("FILE")
                .help("Transactions export (.json or .csv)"),
        )
        .arg(
            Arg::new("goals-file")
                .long("goals")
                .global(true)
                .value_name("FILE")
                .help("Goals export (.json)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (-v, -vv, -vvv)"),
        )
        .subcommand(json_args(
            Command::new("summary")
                .about("Balance, cash flow, expenses, and budget usage")
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .value_parser(value_parser!(i64))
                        .help("Use this budget usage percent instead of computing it"),
                )
                .arg(month_arg().help("Scope cash flow to this month")),
        ))
        .subcommand(json_args(
            Command::new("series")
                .about("Income and expenses per month or ISO week")
                .arg(
                    Arg::new("granularity")
                        .long("granularity")
                        .value_parser(["monthly", "weekly"])
                        .default_value("monthly"),
                )
                .arg(
                    Arg::new("trailing")
                        .long("trailing")
                        .value_parser(value_parser!(usize))
                        .help("Weekly only: fixed window of the last N weeks"),
                ),
        ))
        .subcommand(json_args(
            Command::new("categories")
                .about("Expenses by category")
                .arg(month_arg().help("Only expenses in this month")),
        ))
        .subcommand(json_args(
            Command::new("dashboard").about("Everything the dashboard shows, in one go"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand_required(true)
                .subcommand(json_args(
                    Command::new("list")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on title or category"),
                        )
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["date", "amount", "title"])
                                .default_value("date"),
                        )
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .value_parser(["asc", "desc"])
                                .default_value("desc"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("goals")
                .about("Savings goals")
                .subcommand_required(true)
                .subcommand(json_args(
                    Command::new("list")
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .value_parser(["all", "completed", "in-progress"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["progress", "target", "saved", "name"])
                                .default_value("progress"),
                        ),
                ))
                .subcommand(json_args(
                    Command::new("bump")
                        .about("Add a percentage of the target to a goal, capped at the target")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(
                            Arg::new("percent")
                                .long("percent")
                                .value_parser(value_parser!(u32)),
                        ),
                ))
                .subcommand(json_args(
                    Command::new("edit")
                        .about("Set the saved amount of a goal")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("saved").long("saved").required(true)),
                )),
        )
}
