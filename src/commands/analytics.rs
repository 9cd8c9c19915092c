// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{json_flags, selection};
use crate::aggregate::{
    GroupCount, GroupTotal, MonthlyCashflow, MonthlyTotal, expenses_by_category, group_counts,
    group_totals, income_by_category, monthly_cashflow, monthly_revenue, revenue_by_customer,
};
use crate::kpi::{
    FinancialKpis, FleetKpis, InvoiceKpis, TourKpis, financial_kpis, fleet_kpis, invoice_kpis,
    tour_kpis,
};
use crate::models::InvoiceStatus;
use crate::state::AppState;
use crate::utils::{fmt_money, get_currency, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let Some((name, sub)) = m.subcommand() else {
        return Ok(());
    };
    let mut state = AppState::load(conn, selection(sub))?;
    let ccy = get_currency(conn)?;
    let (json_flag, jsonl_flag) = json_flags(sub);
    match name {
        "financial" => {
            let r = financial_report(&mut state);
            if !maybe_print_json(json_flag, jsonl_flag, &r)? {
                print_financial(&r, &ccy);
            }
        }
        "revenue" => {
            let r = revenue_report(&mut state);
            if !maybe_print_json(json_flag, jsonl_flag, &r)? {
                print_revenue(&r, &ccy);
            }
        }
        "fleet" => {
            let r = fleet_report(&mut state);
            if !maybe_print_json(json_flag, jsonl_flag, &r)? {
                print_fleet(&r);
            }
        }
        "invoices" => {
            let r = invoice_report(&mut state);
            if !maybe_print_json(json_flag, jsonl_flag, &r)? {
                print_invoices(&r, &ccy);
            }
        }
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct FinancialReport {
    pub period: String,
    pub kpis: FinancialKpis,
    pub monthly: Vec<MonthlyCashflow>,
    pub expenses_by_category: Vec<GroupTotal>,
    pub income_by_category: Vec<GroupTotal>,
}

#[derive(Debug, Serialize)]
pub struct RevenueReport {
    pub period: String,
    pub kpis: TourKpis,
    pub by_customer: Vec<GroupTotal>,
    pub monthly: Vec<MonthlyTotal>,
}

#[derive(Debug, Serialize)]
pub struct FleetReport {
    pub period: String,
    pub kpis: FleetKpis,
    pub by_status: Vec<GroupCount>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceReport {
    pub period: String,
    pub kpis: InvoiceKpis,
    pub outstanding_by_customer: Vec<GroupTotal>,
}

pub fn financial_report(state: &mut AppState) -> FinancialReport {
    let year = state.selection.period.year;
    let txs = state.filtered_transactions();
    FinancialReport {
        period: state.selection.period.label(),
        kpis: financial_kpis(&txs),
        monthly: monthly_cashflow(&txs, year),
        expenses_by_category: expenses_by_category(&txs),
        income_by_category: income_by_category(&txs),
    }
}

pub fn revenue_report(state: &mut AppState) -> RevenueReport {
    let year = state.selection.period.year;
    let tours = state.filtered_tours();
    RevenueReport {
        period: state.selection.period.label(),
        kpis: tour_kpis(&tours),
        by_customer: revenue_by_customer(&tours),
        monthly: monthly_revenue(&tours, year),
    }
}

pub fn fleet_report(state: &mut AppState) -> FleetReport {
    let transports = state.filtered_transports();
    FleetReport {
        period: state.selection.period.label(),
        kpis: fleet_kpis(&transports),
        by_status: group_counts(&transports, |t| t.status.label().to_string()),
    }
}

pub fn invoice_report(state: &mut AppState) -> InvoiceReport {
    let invoices = state.filtered_invoices();
    let unpaid: Vec<_> = invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Paid)
        .cloned()
        .collect();
    InvoiceReport {
        period: state.selection.period.label(),
        kpis: invoice_kpis(&invoices),
        outstanding_by_customer: group_totals(&unpaid, |i| i.customer.clone(), |i| i.amount),
    }
}

fn group_rows(groups: &[GroupTotal], ccy: &str) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| vec![g.label.clone(), fmt_money(&g.total, ccy)])
        .collect()
}

fn print_financial(r: &FinancialReport, ccy: &str) {
    println!("Financial overview: {}", r.period);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Profit"],
            vec![vec![
                fmt_money(&r.kpis.total_income, ccy),
                fmt_money(&r.kpis.total_expense, ccy),
                fmt_money(&r.kpis.profit, ccy),
            ]],
        )
    );
    let monthly = r
        .monthly
        .iter()
        .map(|m| {
            vec![
                m.label.to_string(),
                format!("{:.2}", m.income),
                format!("{:.2}", m.expense),
                format!("{:.2}", m.profit),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Profit"], monthly)
    );
    println!(
        "{}",
        pretty_table(
            &["Expense category", "Total"],
            group_rows(&r.expenses_by_category, ccy)
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Income category", "Total"],
            group_rows(&r.income_by_category, ccy)
        )
    );
}

fn print_revenue(r: &RevenueReport, ccy: &str) {
    println!("Tour revenue: {}", r.period);
    println!(
        "{}",
        pretty_table(
            &["Tours", "Revenue", "Avg / tour", "Customers", "Drivers", "Vehicles"],
            vec![vec![
                r.kpis.tours.to_string(),
                fmt_money(&r.kpis.total_revenue, ccy),
                fmt_money(&r.kpis.average_revenue, ccy),
                r.kpis.distinct_customers.to_string(),
                r.kpis.distinct_drivers.to_string(),
                r.kpis.distinct_vehicles.to_string(),
            ]],
        )
    );
    println!(
        "{}",
        pretty_table(&["Customer", "Revenue"], group_rows(&r.by_customer, ccy))
    );
    let monthly = r
        .monthly
        .iter()
        .map(|m| vec![m.label.to_string(), format!("{:.2}", m.total)])
        .collect();
    println!("{}", pretty_table(&["Month", "Revenue"], monthly));
}

fn print_fleet(r: &FleetReport) {
    println!("Fleet performance: {}", r.period);
    println!(
        "{}",
        pretty_table(
            &["Transports", "Evaluated", "On time", "On-time rate", "Drivers", "Vehicles"],
            vec![vec![
                r.kpis.transports.to_string(),
                r.kpis.evaluated.to_string(),
                r.kpis.on_time.to_string(),
                format!("{}%", r.kpis.on_time_rate),
                r.kpis.distinct_drivers.to_string(),
                r.kpis.distinct_vehicles.to_string(),
            ]],
        )
    );
    let rows = r
        .by_status
        .iter()
        .map(|g| vec![g.label.clone(), g.count.to_string()])
        .collect();
    println!("{}", pretty_table(&["Status", "Transports"], rows));
}

fn print_invoices(r: &InvoiceReport, ccy: &str) {
    println!("Invoices: {}", r.period);
    println!(
        "{}",
        pretty_table(
            &["Invoices", "Invoiced", "Outstanding", "Overdue"],
            vec![vec![
                r.kpis.invoices.to_string(),
                fmt_money(&r.kpis.total_invoiced, ccy),
                fmt_money(&r.kpis.outstanding, ccy),
                r.kpis.overdue.to_string(),
            ]],
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Customer", "Outstanding"],
            group_rows(&r.outstanding_by_customer, ccy)
        )
    );
}
