// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FinancialTransaction, Invoice, Tour, Transport};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Fleetdesk", "fleetdesk"));

pub const DB_ENV: &str = "FLEETDESK_DB";

pub fn db_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("fleetdesk.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    open_at(&path)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    tracing::debug!("store ready at {}", path.display());
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('income','expense')),
        amount TEXT NOT NULL,
        category TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);

    CREATE TABLE IF NOT EXISTS tours(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        customer TEXT NOT NULL,
        driver TEXT,
        vehicle TEXT,
        revenue TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_tours_date ON tours(date);

    CREATE TABLE IF NOT EXISTS transports(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        transport_number TEXT NOT NULL UNIQUE,
        customer TEXT NOT NULL,
        pickup_location TEXT NOT NULL,
        delivery_location TEXT NOT NULL,
        planned_delivery TEXT NOT NULL,
        actual_delivery TEXT,
        status TEXT NOT NULL,
        driver TEXT,
        vehicle TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS invoices(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        invoice_number TEXT NOT NULL UNIQUE,
        customer TEXT NOT NULL,
        issue_date TEXT NOT NULL,
        due_date TEXT NOT NULL,
        amount TEXT NOT NULL,
        status TEXT NOT NULL CHECK(status IN ('open','paid','overdue'))
    );
    "#,
    )?;
    Ok(())
}

fn decimal_col(r: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let s: String = r.get(idx)?;
    s.trim().parse::<Decimal>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parsed_col<T>(r: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let s: String = r.get(idx)?;
    s.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn insert_transaction(conn: &Connection, tx: &FinancialTransaction) -> Result<i64> {
    conn.execute(
        "INSERT INTO transactions(date, type, amount, category, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            tx.date,
            tx.r#type.as_str(),
            tx.amount.to_string(),
            tx.category,
            tx.description
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_transactions(conn: &Connection) -> Result<Vec<FinancialTransaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, type, amount, category, description FROM transactions ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(FinancialTransaction {
            id: r.get(0)?,
            date: r.get(1)?,
            r#type: parsed_col(r, 2)?,
            amount: decimal_col(r, 3)?,
            category: r.get(4)?,
            description: r.get(5)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("Read transaction row")?);
    }
    Ok(out)
}

pub fn insert_tour(conn: &Connection, tour: &Tour) -> Result<i64> {
    conn.execute(
        "INSERT INTO tours(date, customer, driver, vehicle, revenue) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            tour.date,
            tour.customer,
            tour.driver,
            tour.vehicle,
            tour.revenue.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_tours(conn: &Connection) -> Result<Vec<Tour>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, customer, driver, vehicle, revenue FROM tours ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(Tour {
            id: r.get(0)?,
            date: r.get(1)?,
            customer: r.get(2)?,
            driver: r.get(3)?,
            vehicle: r.get(4)?,
            revenue: decimal_col(r, 5)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("Read tour row")?);
    }
    Ok(out)
}

pub fn insert_transport(conn: &Connection, t: &Transport) -> Result<i64> {
    conn.execute(
        "INSERT INTO transports(transport_number, customer, pickup_location, delivery_location,
             planned_delivery, actual_delivery, status, driver, vehicle)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            t.transport_number,
            t.customer,
            t.pickup_location,
            t.delivery_location,
            t.planned_delivery_date,
            t.actual_delivery_date,
            t.status.as_str(),
            t.driver,
            t.vehicle
        ],
    )
    .with_context(|| format!("Insert transport '{}'", t.transport_number))?;
    Ok(conn.last_insert_rowid())
}

/// Updates status (and optionally the actual delivery time). Returns false
/// when no transport carries that number.
pub fn update_transport_status(
    conn: &Connection,
    number: &str,
    status: crate::models::TransportStatus,
    actual_delivery: Option<&str>,
) -> Result<bool> {
    let n = conn.execute(
        "UPDATE transports SET status=?2, actual_delivery=COALESCE(?3, actual_delivery)
         WHERE transport_number=?1",
        params![number, status.as_str(), actual_delivery],
    )?;
    Ok(n > 0)
}

pub fn load_transports(conn: &Connection) -> Result<Vec<Transport>> {
    let mut stmt = conn.prepare(
        "SELECT id, transport_number, customer, pickup_location, delivery_location,
                planned_delivery, actual_delivery, status, driver, vehicle
         FROM transports ORDER BY planned_delivery, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(Transport {
            id: r.get(0)?,
            transport_number: r.get(1)?,
            customer: r.get(2)?,
            pickup_location: r.get(3)?,
            delivery_location: r.get(4)?,
            planned_delivery_date: r.get(5)?,
            actual_delivery_date: r.get(6)?,
            status: parsed_col(r, 7)?,
            driver: r.get(8)?,
            vehicle: r.get(9)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("Read transport row")?);
    }
    Ok(out)
}

pub fn insert_invoice(conn: &Connection, inv: &Invoice) -> Result<i64> {
    conn.execute(
        "INSERT INTO invoices(invoice_number, customer, issue_date, due_date, amount, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            inv.invoice_number,
            inv.customer,
            inv.issue_date,
            inv.due_date,
            inv.amount.to_string(),
            inv.status.as_str()
        ],
    )
    .with_context(|| format!("Insert invoice '{}'", inv.invoice_number))?;
    Ok(conn.last_insert_rowid())
}

pub fn load_invoices(conn: &Connection) -> Result<Vec<Invoice>> {
    let mut stmt = conn.prepare(
        "SELECT id, invoice_number, customer, issue_date, due_date, amount, status
         FROM invoices ORDER BY issue_date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(Invoice {
            id: r.get(0)?,
            invoice_number: r.get(1)?,
            customer: r.get(2)?,
            issue_date: r.get(3)?,
            due_date: r.get(4)?,
            amount: decimal_col(r, 5)?,
            status: parsed_col(r, 6)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("Read invoice row")?);
    }
    Ok(out)
}
