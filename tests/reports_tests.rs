// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::{cli, commands::reports, commands::seed, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    seed::seed(&conn).unwrap();
    conn
}

fn show_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["fleetdesk", "report", "show"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, report_m) = matches.subcommand().unwrap();
    let (_, show_m) = report_m.subcommand().unwrap();
    show_m.clone()
}

#[test]
fn transports_report_hides_requested_columns() {
    let conn = setup();
    let m = show_matches(&[
        "transports",
        "--year",
        "2024",
        "--period",
        "h2",
        "--hide",
        "id,pickup,delivery",
        "--hide",
        "vehicle",
    ]);
    let table = reports::build_report(&conn, &m).unwrap();
    assert_eq!(table.rows.len(), 3);
    assert_eq!(
        table.headers,
        vec![
            "Transport No.",
            "Customer",
            "Planned delivery",
            "Actual delivery",
            "Status",
            "Driver"
        ]
    );
    assert_eq!(table.rows[0].get("number"), Some("TR-2024-001"));
    assert_eq!(table.rows[0].get("pickup"), None);
}

#[test]
fn only_and_search_narrow_the_tours_report() {
    let conn = setup();
    let m = show_matches(&[
        "tours", "--year", "2024", "--search", "alpen", "--only", "date,revenue",
    ]);
    let table = reports::build_report(&conn, &m).unwrap();
    assert_eq!(table.headers, vec!["Date", "Revenue"]);
    let values: Vec<Vec<String>> = table.rows.iter().map(|r| r.values()).collect();
    assert_eq!(
        values,
        vec![
            vec!["2024-02-08".to_string(), "920.00".to_string()],
            vec!["2024-07-22".to_string(), "1185.00".to_string()],
        ]
    );
}

#[test]
fn unknown_column_is_reported() {
    let conn = setup();
    let m = show_matches(&["invoices", "--hide", "colour"]);
    let err = reports::build_report(&conn, &m).unwrap_err();
    assert!(err.to_string().contains("unknown column 'colour' for invoices report"));
}

#[test]
fn unknown_report_kind_is_reported() {
    let conn = setup();
    let m = show_matches(&["vehicles"]);
    let err = reports::build_report(&conn, &m).unwrap_err();
    assert!(err.to_string().contains("unknown report 'vehicles'"));
}

#[test]
fn period_without_records_gives_empty_table() {
    let conn = setup();
    let m = show_matches(&["transactions", "--year", "2019"]);
    let table = reports::build_report(&conn, &m).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.headers.len(), 6);
}
