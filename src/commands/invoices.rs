// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required_arg, selection};
use crate::db;
use crate::filter::filter_records;
use crate::models::{Invoice, InvoiceStatus};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Result, bail};
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
    let issued = parse_date(&required_arg(sub, "issued")?)?;
    let due = parse_date(&required_arg(sub, "due")?)?;
    if due < issued {
        bail!("Due date {} is before issue date {}", due, issued);
    }
    let status: InvoiceStatus = required_arg(sub, "status")?.parse()?;
    let inv = Invoice {
        id: 0,
        invoice_number: required_arg(sub, "number")?,
        customer: required_arg(sub, "customer")?,
        issue_date: issued.to_string(),
        due_date: due.to_string(),
        amount: parse_decimal(&required_arg(sub, "amount")?)?,
        status,
    };
    db::insert_invoice(conn, &inv)?;
    println!(
        "Registered invoice {} for '{}' ({:.2}, {})",
        inv.invoice_number, inv.customer, inv.amount, inv.status
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|i| {
                vec![
                    i.invoice_number.clone(),
                    i.customer.clone(),
                    i.issue_date.clone(),
                    i.due_date.clone(),
                    format!("{:.2}", i.amount),
                    i.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["No.", "Customer", "Issued", "Due", "Amount", "Status"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Invoice>> {
    let sel = selection(sub);
    let all = db::load_invoices(conn)?;
    Ok(filter_records(&all, &sel.period, sel.search.as_deref()))
}
