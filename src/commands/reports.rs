// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, required_arg, selection};
use crate::error::InputError;
use crate::models::{FinancialTransaction, Invoice, Tour, Transport};
use crate::projection::{ColumnVisibility, ReportTable, check_columns};
use crate::record::Record;
use crate::state::AppState;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("columns", sub)) => columns(sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn column_rows<R: Record>() -> Vec<Vec<String>> {
    R::columns()
        .iter()
        .map(|c| {
            let searchable = if R::searchable().contains(&c.key) { "yes" } else { "" };
            vec![c.key.to_string(), c.label.to_string(), searchable.to_string()]
        })
        .collect()
}

fn columns(sub: &clap::ArgMatches) -> Result<()> {
    let kind = required_arg(sub, "kind")?;
    let rows = match kind.as_str() {
        "transactions" => column_rows::<FinancialTransaction>(),
        "tours" => column_rows::<Tour>(),
        "transports" => column_rows::<Transport>(),
        "invoices" => column_rows::<Invoice>(),
        other => return Err(InputError::UnknownReport(other.to_string()).into()),
    };
    println!("{}", pretty_table(&["Key", "Header", "Searchable"], rows));
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let table = build_report(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &table.rows)? {
        if table.headers.is_empty() {
            println!("(all columns hidden, {} matching rows)", table.rows.len());
        } else {
            println!("{}", table.to_table());
        }
    }
    Ok(())
}

fn keys(sub: &clap::ArgMatches, name: &str) -> Vec<String> {
    sub.get_many::<String>(name)
        .map(|vals| {
            vals.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Filters the chosen record kind by the selected period and search term and
/// projects it onto the visible columns.
pub fn build_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<ReportTable> {
    let kind = required_arg(sub, "kind")?;
    let hide = keys(sub, "hide");
    let only = keys(sub, "only");
    let mut state = AppState::load(conn, selection(sub))?;
    match kind.as_str() {
        "transactions" => {
            let items = state.filtered_transactions();
            project_with(&mut state, &items, &hide, &only)
        }
        "tours" => {
            let items = state.filtered_tours();
            project_with(&mut state, &items, &hide, &only)
        }
        "transports" => {
            let items = state.filtered_transports();
            project_with(&mut state, &items, &hide, &only)
        }
        "invoices" => {
            let items = state.filtered_invoices();
            project_with(&mut state, &items, &hide, &only)
        }
        other => Err(InputError::UnknownReport(other.to_string()).into()),
    }
}

fn project_with<R: Record>(
    state: &mut AppState,
    items: &[R],
    hide: &[String],
    only: &[String],
) -> Result<ReportTable> {
    check_columns::<R>(hide)?;
    check_columns::<R>(only)?;
    let mut vis = if only.is_empty() {
        state.visibility::<R>()
    } else {
        let keep: Vec<&str> = only.iter().map(String::as_str).collect();
        ColumnVisibility::only::<R>(&keep)
    };
    for key in hide {
        vis.hide(key);
    }
    let table = ReportTable::build(items, &vis);
    state.set_visibility::<R>(vis);
    Ok(table)
}
