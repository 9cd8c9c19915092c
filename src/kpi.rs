// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summary figures for the dashboard cards. Every function accepts empty
//! input and never divides by zero.

use crate::models::{
    FinancialTransaction, Invoice, InvoiceStatus, Tour, TransactionType, Transport,
};
use crate::utils::lenient_instant;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialKpis {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetKpis {
    pub transports: usize,
    pub evaluated: usize,
    pub on_time: usize,
    pub on_time_rate: Decimal,
    pub distinct_drivers: usize,
    pub distinct_vehicles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourKpis {
    pub tours: usize,
    pub total_revenue: Decimal,
    pub average_revenue: Decimal,
    pub distinct_customers: usize,
    pub distinct_drivers: usize,
    pub distinct_vehicles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceKpis {
    pub invoices: usize,
    pub total_invoiced: Decimal,
    pub outstanding: Decimal,
    pub overdue: usize,
}

pub fn financial_kpis(txs: &[FinancialTransaction]) -> FinancialKpis {
    let total_income = sum_of(txs, TransactionType::Income);
    let total_expense = sum_of(txs, TransactionType::Expense);
    FinancialKpis {
        total_income,
        total_expense,
        profit: total_income - total_expense,
    }
}

fn sum_of(txs: &[FinancialTransaction], kind: TransactionType) -> Decimal {
    txs.iter()
        .filter(|t| t.r#type == kind)
        .map(|t| t.amount)
        .sum()
}

/// `part / whole` as a percentage with one decimal, 0.0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::new(0, 1);
    }
    let pct = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole);
    let mut rounded = pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    // keep one decimal place even for whole numbers
    rounded.rescale(1);
    rounded
}

/// Whether the transport arrived no later than planned. `None` when either
/// timestamp is missing or malformed.
pub fn delivered_on_time(t: &Transport) -> Option<bool> {
    let planned = lenient_instant(&t.planned_delivery_date)?;
    let actual = lenient_instant(t.actual_delivery_date.as_deref()?)?;
    Some(actual <= planned)
}

/// Share of evaluable transports delivered on time, in percent.
pub fn on_time_rate(transports: &[Transport]) -> Decimal {
    let (on_time, evaluated) = on_time_counts(transports);
    percentage(on_time, evaluated)
}

fn on_time_counts(transports: &[Transport]) -> (usize, usize) {
    transports
        .iter()
        .filter_map(delivered_on_time)
        .fold((0, 0), |(ok, n), on_time| (ok + usize::from(on_time), n + 1))
}

/// Number of distinct non-empty identifiers.
pub fn distinct_count<'a, R, F>(items: &'a [R], field: F) -> usize
where
    F: Fn(&'a R) -> Option<&'a str>,
{
    items
        .iter()
        .filter_map(field)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

pub fn fleet_kpis(transports: &[Transport]) -> FleetKpis {
    let (on_time, evaluated) = on_time_counts(transports);
    FleetKpis {
        transports: transports.len(),
        evaluated,
        on_time,
        on_time_rate: percentage(on_time, evaluated),
        distinct_drivers: distinct_count(transports, |t| t.driver.as_deref()),
        distinct_vehicles: distinct_count(transports, |t| t.vehicle.as_deref()),
    }
}

pub fn tour_kpis(tours: &[Tour]) -> TourKpis {
    let total_revenue: Decimal = tours.iter().map(|t| t.revenue).sum();
    let average_revenue = if tours.is_empty() {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(tours.len())).round_dp(2)
    };
    TourKpis {
        tours: tours.len(),
        total_revenue,
        average_revenue,
        distinct_customers: distinct_count(tours, |t| Some(t.customer.as_str())),
        distinct_drivers: distinct_count(tours, |t| t.driver.as_deref()),
        distinct_vehicles: distinct_count(tours, |t| t.vehicle.as_deref()),
    }
}

pub fn invoice_kpis(invoices: &[Invoice]) -> InvoiceKpis {
    InvoiceKpis {
        invoices: invoices.len(),
        total_invoiced: invoices.iter().map(|i| i.amount).sum(),
        outstanding: invoices
            .iter()
            .filter(|i| i.status != InvoiceStatus::Paid)
            .map(|i| i.amount)
            .sum(),
        overdue: invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Overdue)
            .count(),
    }
}
