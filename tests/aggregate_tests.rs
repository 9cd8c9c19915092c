// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::aggregate::{
    GroupTotal, expenses_by_category, group_counts, monthly_cashflow, monthly_revenue,
    monthly_totals, revenue_by_customer,
};
use fleetdesk::models::{FinancialTransaction, Tour, TransactionType};
use rust_decimal::Decimal;

fn tour(date: &str, customer: &str, revenue: &str) -> Tour {
    Tour {
        id: 0,
        date: date.to_string(),
        customer: customer.to_string(),
        driver: None,
        vehicle: None,
        revenue: revenue.parse().unwrap(),
    }
}

fn tx(date: &str, kind: TransactionType, amount: &str, category: &str) -> FinancialTransaction {
    FinancialTransaction {
        id: 0,
        date: date.to_string(),
        r#type: kind,
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        description: String::new(),
    }
}

#[test]
fn customer_groups_keep_first_seen_order() {
    let tours = vec![
        tour("2024-01-01", "A", "100"),
        tour("2024-01-02", "B", "50"),
        tour("2024-01-03", "A", "25"),
    ];
    let out = revenue_by_customer(&tours);
    assert_eq!(
        out,
        vec![
            GroupTotal {
                label: "A".into(),
                total: Decimal::from(125)
            },
            GroupTotal {
                label: "B".into(),
                total: Decimal::from(50)
            },
        ]
    );
}

#[test]
fn groups_are_not_sorted_lexically() {
    let tours = vec![
        tour("2024-01-01", "Zeta", "1"),
        tour("2024-01-02", "Alpha", "1"),
    ];
    let labels: Vec<String> = revenue_by_customer(&tours)
        .into_iter()
        .map(|g| g.label)
        .collect();
    assert_eq!(labels, vec!["Zeta", "Alpha"]);
}

#[test]
fn monthly_series_is_dense_even_when_empty() {
    let none: Vec<Tour> = Vec::new();
    let out = monthly_revenue(&none, 2024);
    assert_eq!(out.len(), 12);
    assert!(out.iter().all(|m| m.total.is_zero()));
    assert_eq!(out[0].label, "Jan");
    assert_eq!(out[11].label, "Dec");
    let months: Vec<u32> = out.iter().map(|m| m.month).collect();
    assert_eq!(months, (0..12).collect::<Vec<u32>>());
}

#[test]
fn monthly_series_ignores_other_years_and_bad_dates() {
    let tours = vec![
        tour("2024-03-05", "A", "10.10"),
        tour("2024-03-28T08:30", "B", "0.20"),
        tour("2023-03-05", "A", "999"),
        tour("garbage", "A", "999"),
        tour("2024-12-31", "C", "5"),
    ];
    let out = monthly_totals(&tours, 2024, |t| t.revenue);
    assert_eq!(out.len(), 12);
    assert_eq!(out[2].total, "10.30".parse::<Decimal>().unwrap());
    assert_eq!(out[11].total, Decimal::from(5));
    assert_eq!(out[0].total, Decimal::ZERO);
}

#[test]
fn decimal_sums_do_not_drift() {
    let tours: Vec<Tour> = (0..1000).map(|_| tour("2024-06-01", "A", "0.10")).collect();
    let out = revenue_by_customer(&tours);
    assert_eq!(out[0].total, Decimal::from(100));
    assert_eq!(format!("{:.2}", out[0].total), "100.00");
}

#[test]
fn cashflow_splits_income_and_expense_per_month() {
    let txs = vec![
        tx("2024-01-15", TransactionType::Income, "1000", "Freight"),
        tx("2024-01-20", TransactionType::Expense, "300", "Fuel"),
        tx("2024-02-03", TransactionType::Expense, "50", "Tolls"),
    ];
    let out = monthly_cashflow(&txs, 2024);
    assert_eq!(out.len(), 12);
    assert_eq!(out[0].income, Decimal::from(1000));
    assert_eq!(out[0].expense, Decimal::from(300));
    assert_eq!(out[0].profit, Decimal::from(700));
    assert_eq!(out[1].profit, Decimal::from(-50));
    assert!(out[2..].iter().all(|m| m.income.is_zero() && m.expense.is_zero()));
}

#[test]
fn expenses_group_by_category_and_skip_income() {
    let txs = vec![
        tx("2024-01-15", TransactionType::Income, "1000", "Freight"),
        tx("2024-01-20", TransactionType::Expense, "300", "Fuel"),
        tx("2024-02-03", TransactionType::Expense, "50", ""),
        tx("2024-02-04", TransactionType::Expense, "20.5", "Fuel"),
    ];
    let out = expenses_by_category(&txs);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].label, "Fuel");
    assert_eq!(out[0].total, "320.5".parse::<Decimal>().unwrap());
    assert_eq!(out[1].label, "(uncategorized)");
}

#[test]
fn counts_follow_first_seen_order() {
    let tours = vec![
        tour("2024-01-01", "B", "1"),
        tour("2024-01-01", "A", "1"),
        tour("2024-01-01", "B", "1"),
    ];
    let out = group_counts(&tours, |t| t.customer.clone());
    assert_eq!(out.len(), 2);
    assert_eq!((out[0].label.as_str(), out[0].count), ("B", 2));
    assert_eq!((out[1].label.as_str(), out[1].count), ("A", 1));
}
