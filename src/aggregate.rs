// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Grouping and summing for the analytics pages.
//!
//! Monthly series are dense (always twelve entries). Categorical groups
//! keep the order in which each key was first seen.

use crate::models::{FinancialTransaction, Tour, TransactionType};
use crate::record::Record;
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub label: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month: u32,
    pub label: &'static str,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCashflow {
    pub month: u32,
    pub label: &'static str,
    pub income: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

/// Twelve zero-initialized buckets for `year`, filled with `value` per record.
pub fn monthly_totals<R, F>(items: &[R], year: i32, value: F) -> Vec<MonthlyTotal>
where
    R: Record,
    F: Fn(&R) -> Decimal,
{
    let mut sums = [Decimal::ZERO; 12];
    for item in items {
        if let Some(d) = item.period_date().filter(|d| d.year() == year) {
            sums[d.month0() as usize] += value(item);
        }
    }
    sums.iter()
        .enumerate()
        .map(|(i, total)| MonthlyTotal {
            month: i as u32,
            label: MONTH_LABELS[i],
            total: *total,
        })
        .collect()
}

/// Sums `value` per `key`, in first-seen key order.
pub fn group_totals<R, K, F>(items: &[R], key: K, value: F) -> Vec<GroupTotal>
where
    K: Fn(&R) -> String,
    F: Fn(&R) -> Decimal,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<GroupTotal> = Vec::new();
    for item in items {
        let label = key(item);
        let amount = value(item);
        match index.get(&label) {
            Some(&i) => out[i].total += amount,
            None => {
                index.insert(label.clone(), out.len());
                out.push(GroupTotal {
                    label,
                    total: amount,
                });
            }
        }
    }
    out
}

/// Number of records per `key`, in first-seen key order.
pub fn group_counts<R, K>(items: &[R], key: K) -> Vec<GroupCount>
where
    K: Fn(&R) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<GroupCount> = Vec::new();
    for item in items {
        let label = key(item);
        match index.get(&label) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(label.clone(), out.len());
                out.push(GroupCount { label, count: 1 });
            }
        }
    }
    out
}

pub fn monthly_cashflow(txs: &[FinancialTransaction], year: i32) -> Vec<MonthlyCashflow> {
    let income = monthly_totals(txs, year, |t| signed_amount(t, TransactionType::Income));
    let expense = monthly_totals(txs, year, |t| signed_amount(t, TransactionType::Expense));
    income
        .into_iter()
        .zip(expense)
        .map(|(i, e)| MonthlyCashflow {
            month: i.month,
            label: i.label,
            income: i.total,
            expense: e.total,
            profit: i.total - e.total,
        })
        .collect()
}

pub fn expenses_by_category(txs: &[FinancialTransaction]) -> Vec<GroupTotal> {
    by_category(txs, TransactionType::Expense)
}

pub fn income_by_category(txs: &[FinancialTransaction]) -> Vec<GroupTotal> {
    by_category(txs, TransactionType::Income)
}

fn by_category(txs: &[FinancialTransaction], kind: TransactionType) -> Vec<GroupTotal> {
    let matching: Vec<FinancialTransaction> =
        txs.iter().filter(|t| t.r#type == kind).cloned().collect();
    group_totals(&matching, |t| category_label(&t.category), |t| t.amount)
}

pub fn revenue_by_customer(tours: &[Tour]) -> Vec<GroupTotal> {
    group_totals(tours, |t| t.customer.clone(), |t| t.revenue)
}

pub fn monthly_revenue(tours: &[Tour], year: i32) -> Vec<MonthlyTotal> {
    monthly_totals(tours, year, |t| t.revenue)
}

fn signed_amount(t: &FinancialTransaction, kind: TransactionType) -> Decimal {
    if t.r#type == kind {
        t.amount
    } else {
        Decimal::ZERO
    }
}

fn category_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "(uncategorized)".to_string()
    } else {
        trimmed.to_string()
    }
}
