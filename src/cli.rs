// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

fn period_args() -> [Arg; 3] {
    [
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .help("Reporting year (defaults to the current year)"),
        Arg::new("period")
            .long("period")
            .default_value("year")
            .help("year | h1 | h2 | q1..q4 | m0..m11 (0 = January)"),
        Arg::new("search")
            .long("search")
            .help("Case-insensitive free-text filter"),
    ]
}

fn text(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

fn required(name: &'static str) -> Arg {
    text(name).required(true)
}

fn listing(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .args(period_args())
        .args(json_args())
}

pub fn build_cli() -> Command {
    Command::new("fleetdesk")
        .about("Transport-management reporting: periods, analytics, KPIs and report tables")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the local store"))
        .subcommand(
            Command::new("tx")
                .about("Financial transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(required("date"))
                        .arg(required("type").help("income | expense"))
                        .arg(required("amount"))
                        .arg(text("category").default_value(""))
                        .arg(text("description").default_value("")),
                )
                .subcommand(listing("list", "List transactions in a period")),
        )
        .subcommand(
            Command::new("tour")
                .about("Driver tours")
                .subcommand(
                    Command::new("add")
                        .about("Record a tour")
                        .arg(required("date"))
                        .arg(required("customer"))
                        .arg(required("revenue"))
                        .arg(text("driver"))
                        .arg(text("vehicle")),
                )
                .subcommand(listing("list", "List tours in a period")),
        )
        .subcommand(
            Command::new("transport")
                .about("Transport orders")
                .subcommand(
                    Command::new("add")
                        .about("Register a transport order")
                        .arg(required("number"))
                        .arg(required("customer"))
                        .arg(required("pickup"))
                        .arg(required("delivery"))
                        .arg(required("planned").help("Planned delivery, YYYY-MM-DD[THH:MM]"))
                        .arg(text("actual").help("Actual delivery, YYYY-MM-DD[THH:MM]"))
                        .arg(text("status").default_value("planned"))
                        .arg(text("driver"))
                        .arg(text("vehicle")),
                )
                .subcommand(
                    Command::new("set-status")
                        .about("Move a transport to another status")
                        .arg(required("number"))
                        .arg(required("status"))
                        .arg(text("actual").help("Actual delivery, YYYY-MM-DD[THH:MM]")),
                )
                .subcommand(listing("list", "List transports by planned delivery")),
        )
        .subcommand(
            Command::new("invoice")
                .about("Customer invoices")
                .subcommand(
                    Command::new("add")
                        .about("Register an invoice")
                        .arg(required("number"))
                        .arg(required("customer"))
                        .arg(required("issued"))
                        .arg(required("due"))
                        .arg(required("amount"))
                        .arg(text("status").default_value("open")),
                )
                .subcommand(listing("list", "List invoices by issue date")),
        )
        .subcommand(
            Command::new("analytics")
                .about("Period analytics")
                .subcommand(listing("financial", "Income, expenses, profit and monthly cash flow"))
                .subcommand(listing("revenue", "Tour revenue by customer and month"))
                .subcommand(listing("fleet", "On-time rate, drivers, vehicles and status mix"))
                .subcommand(listing("invoices", "Invoiced and outstanding amounts")),
        )
        .subcommand(
            Command::new("report")
                .about("Column-configurable report tables")
                .subcommand(
                    Command::new("columns")
                        .about("List the columns of a report")
                        .arg(Arg::new("kind").required(true)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Render a report")
                        .arg(
                            Arg::new("kind")
                                .required(true)
                                .help("transactions | tours | transports | invoices"),
                        )
                        .arg(
                            text("hide")
                                .value_delimiter(',')
                                .action(ArgAction::Append)
                                .help("Column keys to hide"),
                        )
                        .arg(
                            text("only")
                                .value_delimiter(',')
                                .action(ArgAction::Append)
                                .conflicts_with("hide")
                                .help("Show only these column keys"),
                        )
                        .args(period_args())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("assist")
                .about("Text-generation assistants")
                .subcommand(
                    Command::new("address")
                        .about("Insights about a delivery address")
                        .arg(required("address")),
                )
                .subcommand(
                    Command::new("route")
                        .about("Route and vehicle suggestion for a transport")
                        .arg(required("pickup"))
                        .arg(required("delivery"))
                        .arg(required("vehicle"))
                        .arg(required("cargo"))
                        .arg(text("instructions")),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("set")
                        .about("Set a setting")
                        .arg(Arg::new("key").required(true).help("currency | textgen_endpoint"))
                        .arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("show").about("Show settings")),
        )
        .subcommand(Command::new("seed").about("Load demo records into an empty store"))
}
