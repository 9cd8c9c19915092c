// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required_arg, selection};
use crate::db;
use crate::filter::filter_records;
use crate::kpi::delivered_on_time;
use crate::models::{Transport, TransportStatus};
use crate::utils::{maybe_print_json, opt_text, pretty_table, timestamp_text};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("set-status", sub)) => set_status(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let planned = timestamp_text(&required_arg(sub, "planned")?)?;
    let actual = match opt_text(sub.get_one::<String>("actual")) {
        Some(a) => Some(timestamp_text(&a)?),
        None => None,
    };
    let status: TransportStatus = required_arg(sub, "status")?.parse()?;
    let t = Transport {
        id: 0,
        transport_number: required_arg(sub, "number")?,
        customer: required_arg(sub, "customer")?,
        pickup_location: required_arg(sub, "pickup")?,
        delivery_location: required_arg(sub, "delivery")?,
        planned_delivery_date: planned,
        actual_delivery_date: actual,
        status,
        driver: opt_text(sub.get_one::<String>("driver")),
        vehicle: opt_text(sub.get_one::<String>("vehicle")),
    };
    if t.transport_number.is_empty() {
        bail!("Transport number must not be empty");
    }
    let id = db::insert_transport(conn, &t)?;
    tracing::info!(id, number = %t.transport_number, "registered transport");
    println!(
        "Registered transport {} for '{}' ({} -> {})",
        t.transport_number, t.customer, t.pickup_location, t.delivery_location
    );
    Ok(())
}

fn set_status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let number = required_arg(sub, "number")?;
    let status: TransportStatus = required_arg(sub, "status")?.parse()?;
    let actual = match opt_text(sub.get_one::<String>("actual")) {
        Some(a) => Some(timestamp_text(&a)?),
        None => None,
    };
    if !db::update_transport_status(conn, &number, status, actual.as_deref())? {
        bail!("Transport '{}' not found", number);
    }
    println!("Transport {} is now {}", number, status);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let punctual = match delivered_on_time(t) {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "-",
                };
                vec![
                    t.transport_number.clone(),
                    t.customer.clone(),
                    format!("{} -> {}", t.pickup_location, t.delivery_location),
                    t.planned_delivery_date.clone(),
                    t.actual_delivery_date.clone().unwrap_or_default(),
                    t.status.to_string(),
                    punctual.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["No.", "Customer", "Route", "Planned", "Actual", "Status", "On time"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transport>> {
    let sel = selection(sub);
    let all = db::load_transports(conn)?;
    Ok(filter_records(&all, &sel.period, sel.search.as_deref()))
}
