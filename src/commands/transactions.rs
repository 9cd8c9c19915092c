// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required_arg, selection};
use crate::db;
use crate::filter::filter_records;
use crate::models::{FinancialTransaction, TransactionType};
use crate::utils::{
    fmt_money, get_currency, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
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
    let date = parse_date(&required_arg(sub, "date")?)?;
    let kind: TransactionType = required_arg(sub, "type")?.parse()?;
    let amount = parse_decimal(&required_arg(sub, "amount")?)?;
    if amount.is_sign_negative() {
        bail!("Amount must not be negative; use --type expense instead");
    }
    let tx = FinancialTransaction {
        id: 0,
        date: date.to_string(),
        r#type: kind,
        amount,
        category: required_arg(sub, "category")?,
        description: required_arg(sub, "description")?,
    };
    let id = db::insert_transaction(conn, &tx)?;
    tracing::info!(id, "recorded transaction");
    let ccy = get_currency(conn)?;
    println!("Recorded {} of {} on {}", kind, fmt_money(&amount, &ccy), date);
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
                    t.r#type.to_string(),
                    format!("{:.2}", t.amount),
                    t.category.clone(),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Amount", "Category", "Description"], rows)
        );
    }
    Ok(())
}

/// Stored transactions inside the selected period that match the search term.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<FinancialTransaction>> {
    let sel = selection(sub);
    let all = db::load_transactions(conn)?;
    Ok(filter_records(&all, &sel.period, sel.search.as_deref()))
}
