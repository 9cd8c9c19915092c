// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required_arg, selection};
use crate::db;
use crate::filter::filter_records;
use crate::models::Tour;
use crate::utils::{maybe_print_json, opt_text, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(&required_arg(sub, "date")?)?;
    let tour = Tour {
        id: 0,
        date: date.to_string(),
        customer: required_arg(sub, "customer")?,
        driver: opt_text(sub.get_one::<String>("driver")),
        vehicle: opt_text(sub.get_one::<String>("vehicle")),
        revenue: parse_decimal(&required_arg(sub, "revenue")?)?,
    };
    let id = db::insert_tour(conn, &tour)?;
    tracing::info!(id, "recorded tour");
    println!(
        "Recorded tour for '{}' on {} ({:.2})",
        tour.customer, tour.date, tour.revenue
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.clone(),
                    t.customer.clone(),
                    t.driver.clone().unwrap_or_default(),
                    t.vehicle.clone().unwrap_or_default(),
                    format!("{:.2}", t.revenue),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Customer", "Driver", "Vehicle", "Revenue"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Tour>> {
    let sel = selection(sub);
    let all = db::load_tours(conn)?;
    Ok(filter_records(&all, &sel.period, sel.search.as_deref()))
}
