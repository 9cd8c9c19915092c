// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::{cli, commands::transactions, db};
use rusqlite::{Connection, params};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let rows = [
        ("2024-01-05", "income", "1200.00", "Freight", "January haulage"),
        ("2024-02-10", "expense", "310.40", "Fuel", "Diesel card"),
        ("2024-05-02", "expense", "95.00", "Tolls", "Brenner"),
        ("2023-11-30", "income", "800.00", "Freight", "Last year"),
    ];
    for (date, kind, amount, cat, desc) in rows {
        conn.execute(
            "INSERT INTO transactions(date,type,amount,category,description) VALUES (?1,?2,?3,?4,?5)",
            params![date, kind, amount, cat, desc],
        )
        .unwrap();
    }
    conn
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["fleetdesk", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    list_m.clone()
}

#[test]
fn list_respects_period_selector() {
    let conn = setup();
    let m = list_matches(&["--year", "2024", "--period", "q1"]);
    let rows = transactions::query_rows(&conn, &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-05");
    assert_eq!(rows[1].category, "Fuel");
}

#[test]
fn list_unknown_period_means_whole_year() {
    let conn = setup();
    let m = list_matches(&["--year", "2024", "--period", "fortnight"]);
    let rows = transactions::query_rows(&conn, &m).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn list_search_is_case_insensitive() {
    let conn = setup();
    let m = list_matches(&["--year", "2024", "--search", "BRENNER"]);
    let rows = transactions::query_rows(&conn, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount.to_string(), "95.00");
}

#[test]
fn add_rejects_unknown_type() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "fleetdesk", "tx", "add", "--date", "2024-03-01", "--type", "refund", "--amount", "5",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    let err = transactions::handle(&conn, tx_m).unwrap_err();
    assert!(err.to_string().contains("unknown transaction type 'refund'"));
}

#[test]
fn add_stores_a_transaction() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "fleetdesk",
        "tx",
        "add",
        "--date",
        "2024-03-01",
        "--type",
        "Income",
        "--amount",
        "100",
        "--category",
        "Freight",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&conn, tx_m).unwrap();
    let m = list_matches(&["--year", "2024", "--period", "m2"]);
    let rows = transactions::query_rows(&conn, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount.to_string(), "100");
}
