// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed field lists for every record kind the reports work on.

use crate::models::{FinancialTransaction, Invoice, Tour, Transport};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

pub trait Record {
    /// Report name used on the command line.
    const KIND: &'static str;

    /// Canonical column order.
    fn columns() -> &'static [Column];

    /// Columns consulted by free-text search.
    fn searchable() -> &'static [&'static str];

    /// Display value of a column, `None` for unknown keys.
    fn cell(&self, key: &str) -> Option<String>;

    /// Date that decides period membership.
    fn period_date(&self) -> Option<NaiveDate>;

    fn has_column(key: &str) -> bool {
        Self::columns().iter().any(|c| c.key == key)
    }
}

fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

const TRANSACTION_COLUMNS: [Column; 6] = [
    col("id", "ID"),
    col("date", "Date"),
    col("type", "Type"),
    col("amount", "Amount"),
    col("category", "Category"),
    col("description", "Description"),
];

impl Record for FinancialTransaction {
    const KIND: &'static str = "transactions";

    fn columns() -> &'static [Column] {
        &TRANSACTION_COLUMNS
    }

    fn searchable() -> &'static [&'static str] {
        &["date", "type", "amount", "category", "description"]
    }

    fn cell(&self, key: &str) -> Option<String> {
        let v = match key {
            "id" => self.id.to_string(),
            "date" => self.date.clone(),
            "type" => self.r#type.to_string(),
            "amount" => format!("{:.2}", self.amount),
            "category" => self.category.clone(),
            "description" => self.description.clone(),
            _ => return None,
        };
        Some(v)
    }

    fn period_date(&self) -> Option<NaiveDate> {
        crate::utils::lenient_date(&self.date)
    }
}

const TOUR_COLUMNS: [Column; 6] = [
    col("id", "ID"),
    col("date", "Date"),
    col("customer", "Customer"),
    col("driver", "Driver"),
    col("vehicle", "Vehicle"),
    col("revenue", "Revenue"),
];

impl Record for Tour {
    const KIND: &'static str = "tours";

    fn columns() -> &'static [Column] {
        &TOUR_COLUMNS
    }

    fn searchable() -> &'static [&'static str] {
        &["date", "customer", "driver", "vehicle", "revenue"]
    }

    fn cell(&self, key: &str) -> Option<String> {
        let v = match key {
            "id" => self.id.to_string(),
            "date" => self.date.clone(),
            "customer" => self.customer.clone(),
            "driver" => opt(&self.driver),
            "vehicle" => opt(&self.vehicle),
            "revenue" => format!("{:.2}", self.revenue),
            _ => return None,
        };
        Some(v)
    }

    fn period_date(&self) -> Option<NaiveDate> {
        crate::utils::lenient_date(&self.date)
    }
}

const TRANSPORT_COLUMNS: [Column; 10] = [
    col("id", "ID"),
    col("number", "Transport No."),
    col("customer", "Customer"),
    col("pickup", "Pickup"),
    col("delivery", "Delivery"),
    col("planned", "Planned delivery"),
    col("actual", "Actual delivery"),
    col("status", "Status"),
    col("driver", "Driver"),
    col("vehicle", "Vehicle"),
];

impl Record for Transport {
    const KIND: &'static str = "transports";

    fn columns() -> &'static [Column] {
        &TRANSPORT_COLUMNS
    }

    fn searchable() -> &'static [&'static str] {
        &[
            "number", "customer", "pickup", "delivery", "planned", "actual", "status", "driver",
            "vehicle",
        ]
    }

    fn cell(&self, key: &str) -> Option<String> {
        let v = match key {
            "id" => self.id.to_string(),
            "number" => self.transport_number.clone(),
            "customer" => self.customer.clone(),
            "pickup" => self.pickup_location.clone(),
            "delivery" => self.delivery_location.clone(),
            "planned" => self.planned_delivery_date.clone(),
            "actual" => opt(&self.actual_delivery_date),
            "status" => self.status.label().to_string(),
            "driver" => opt(&self.driver),
            "vehicle" => opt(&self.vehicle),
            _ => return None,
        };
        Some(v)
    }

    fn period_date(&self) -> Option<NaiveDate> {
        crate::utils::lenient_date(&self.planned_delivery_date)
    }
}

const INVOICE_COLUMNS: [Column; 7] = [
    col("id", "ID"),
    col("number", "Invoice No."),
    col("customer", "Customer"),
    col("issued", "Issued"),
    col("due", "Due"),
    col("amount", "Amount"),
    col("status", "Status"),
];

impl Record for Invoice {
    const KIND: &'static str = "invoices";

    fn columns() -> &'static [Column] {
        &INVOICE_COLUMNS
    }

    fn searchable() -> &'static [&'static str] {
        &["number", "customer", "issued", "due", "amount", "status"]
    }

    fn cell(&self, key: &str) -> Option<String> {
        let v = match key {
            "id" => self.id.to_string(),
            "number" => self.invoice_number.clone(),
            "customer" => self.customer.clone(),
            "issued" => self.issue_date.clone(),
            "due" => self.due_date.clone(),
            "amount" => format!("{:.2}", self.amount),
            "status" => self.status.to_string(),
            _ => return None,
        };
        Some(v)
    }

    fn period_date(&self) -> Option<NaiveDate> {
        crate::utils::lenient_date(&self.issue_date)
    }
}
