// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::{
    FinancialTransaction, Invoice, InvoiceStatus, Tour, TransactionType, Transport,
    TransportStatus,
};
use anyhow::{Result, bail};
use rust_decimal::Decimal;
use rusqlite::Connection;

pub fn handle(conn: &Connection) -> Result<()> {
    let n = seed(conn)?;
    println!("Loaded {} demo records", n);
    Ok(())
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn tx(
    date: &str,
    kind: TransactionType,
    cents: i64,
    category: &str,
    desc: &str,
) -> FinancialTransaction {
    FinancialTransaction {
        id: 0,
        date: date.into(),
        r#type: kind,
        amount: money(cents),
        category: category.into(),
        description: desc.into(),
    }
}

fn tour(date: &str, customer: &str, driver: &str, vehicle: &str, cents: i64) -> Tour {
    Tour {
        id: 0,
        date: date.into(),
        customer: customer.into(),
        driver: Some(driver.into()),
        vehicle: Some(vehicle.into()),
        revenue: money(cents),
    }
}

#[allow(clippy::too_many_arguments)]
fn transport(
    number: &str,
    customer: &str,
    pickup: &str,
    delivery: &str,
    planned: &str,
    actual: Option<&str>,
    status: TransportStatus,
    driver: &str,
    vehicle: &str,
) -> Transport {
    Transport {
        id: 0,
        transport_number: number.into(),
        customer: customer.into(),
        pickup_location: pickup.into(),
        delivery_location: delivery.into(),
        planned_delivery_date: planned.into(),
        actual_delivery_date: actual.map(Into::into),
        status,
        driver: Some(driver.into()),
        vehicle: Some(vehicle.into()),
    }
}

fn invoice(
    number: &str,
    customer: &str,
    issued: &str,
    due: &str,
    cents: i64,
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: 0,
        invoice_number: number.into(),
        customer: customer.into(),
        issue_date: issued.into(),
        due_date: due.into(),
        amount: money(cents),
        status,
    }
}

/// Inserts the demo data set. Refuses to touch a store that already has records.
pub fn seed(conn: &Connection) -> Result<usize> {
    let existing: i64 = conn.query_row(
        "SELECT (SELECT COUNT(*) FROM transactions) + (SELECT COUNT(*) FROM tours)
              + (SELECT COUNT(*) FROM transports) + (SELECT COUNT(*) FROM invoices)",
        [],
        |r| r.get(0),
    )?;
    if existing > 0 {
        bail!(
            "Store already holds {} records; seed only runs on an empty store",
            existing
        );
    }

    use TransactionType::{Expense, Income};
    let transactions = [
        tx("2024-01-15", Income, 1_250_000, "Freight", "Contract haulage January"),
        tx("2024-01-20", Expense, 320_000, "Fuel", "Diesel card"),
        tx("2024-02-03", Expense, 85_000, "Maintenance", "Brake service LKW-02"),
        tx("2024-03-01", Income, 980_000, "Freight", "Spot loads March"),
        tx("2024-04-11", Expense, 145_000, "Tolls", "Motorway tolls Q2"),
        tx("2024-07-01", Income, 1_430_000, "Freight", "Contract haulage July"),
        tx("2024-07-18", Expense, 410_000, "Fuel", "Diesel card"),
        tx("2024-10-05", Expense, 230_000, "Insurance", "Fleet insurance"),
    ];
    let tours = [
        tour("2024-01-16", "Nordlicht Logistik", "J. Weber", "LKW-01", 185_000),
        tour("2024-02-08", "Alpen Spedition", "M. Keller", "LKW-02", 92_000),
        tour("2024-03-12", "Nordlicht Logistik", "J. Weber", "LKW-01", 64_000),
        tour("2024-07-02", "Rhein Cargo", "S. Braun", "LKW-03", 210_000),
        tour("2024-07-22", "Alpen Spedition", "M. Keller", "LKW-02", 118_500),
    ];
    let transports = [
        transport(
            "TR-2024-001",
            "Nordlicht Logistik",
            "Hamburg",
            "Berlin",
            "2024-07-20T18:00",
            Some("2024-07-20T17:55"),
            TransportStatus::Completed,
            "J. Weber",
            "LKW-01",
        ),
        transport(
            "TR-2024-002",
            "Alpen Spedition",
            "Munich",
            "Vienna",
            "2024-07-21T14:00",
            Some("2024-07-21T14:30"),
            TransportStatus::Completed,
            "M. Keller",
            "LKW-02",
        ),
        transport(
            "TR-2024-003",
            "Rhein Cargo",
            "Cologne",
            "Rotterdam",
            "2024-08-02T09:00",
            None,
            TransportStatus::InTransit,
            "S. Braun",
            "LKW-03",
        ),
    ];
    let invoices = [
        invoice(
            "RE-2024-001",
            "Nordlicht Logistik",
            "2024-01-31",
            "2024-02-14",
            185_000,
            InvoiceStatus::Paid,
        ),
        invoice(
            "RE-2024-002",
            "Alpen Spedition",
            "2024-02-29",
            "2024-03-14",
            92_000,
            InvoiceStatus::Overdue,
        ),
        invoice(
            "RE-2024-003",
            "Rhein Cargo",
            "2024-07-31",
            "2024-08-14",
            210_000,
            InvoiceStatus::Open,
        ),
    ];

    // all-or-nothing
    let db_tx = conn.unchecked_transaction()?;
    for t in &transactions {
        db::insert_transaction(&db_tx, t)?;
    }
    for t in &tours {
        db::insert_tour(&db_tx, t)?;
    }
    for t in &transports {
        db::insert_transport(&db_tx, t)?;
    }
    for i in &invoices {
        db::insert_invoice(&db_tx, i)?;
    }
    db_tx.commit()?;
    let n = transactions.len() + tours.len() + transports.len() + invoices.len();
    tracing::info!(records = n, "seeded demo data");
    Ok(n)
}
