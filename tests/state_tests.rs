// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::models::{FinancialTransaction, Tour, TransactionType};
use fleetdesk::period::{Period, PeriodSelector};
use fleetdesk::projection::ColumnVisibility;
use fleetdesk::state::{AppState, Collection, Memo, Selection};
use rust_decimal::Decimal;

fn tour(id: i64, date: &str, customer: &str) -> Tour {
    Tour {
        id,
        date: date.into(),
        customer: customer.into(),
        driver: None,
        vehicle: None,
        revenue: Decimal::ONE,
    }
}

#[test]
fn memo_reuses_value_for_same_key() {
    let mut memo: Memo<u32, String> = Memo::default();
    let mut calls = 0;
    let a = memo.get_or_compute(1, || {
        calls += 1;
        "one".to_string()
    });
    let b = memo.get_or_compute(1, || {
        calls += 1;
        "uno".to_string()
    });
    assert_eq!(a, "one");
    assert_eq!(b, "one");
    assert_eq!(calls, 1);
    assert_eq!((memo.hits(), memo.misses()), (1, 1));
}

#[test]
fn collection_recomputes_after_replace_or_new_selection() {
    let mut c = Collection::new(vec![
        tour(1, "2024-02-01", "A"),
        tour(2, "2024-08-01", "B"),
    ]);
    let h1 = Selection::new(Period::new(2024, PeriodSelector::FirstHalf), None);
    assert_eq!(c.filtered(&h1).len(), 1);
    assert_eq!(c.filtered(&h1).len(), 1);
    assert_eq!(c.memo().hits(), 1);

    c.replace(vec![tour(3, "2024-03-01", "C"), tour(4, "2024-04-01", "D")]);
    assert_eq!(c.revision(), 1);
    let ids: Vec<i64> = c.filtered(&h1).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 4]);

    let year = Selection::new(Period::whole_year(2024), Some("d".into()));
    let ids: Vec<i64> = c.filtered(&year).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![4]);
    assert_eq!(c.memo().misses(), 3);
}

#[test]
fn blank_search_is_normalized_away() {
    let a = Selection::new(Period::whole_year(2024), Some("   ".into()));
    let b = Selection::new(Period::whole_year(2024), None);
    assert_eq!(a, b);
}

#[test]
fn app_state_follows_selection_changes() {
    let mut state = AppState::new(Selection::new(Period::whole_year(2024), None));
    state.transactions.replace(vec![
        FinancialTransaction {
            id: 1,
            date: "2024-03-01".into(),
            r#type: TransactionType::Income,
            amount: Decimal::from(100),
            category: "Freight".into(),
            description: String::new(),
        },
        FinancialTransaction {
            id: 2,
            date: "2024-07-01".into(),
            r#type: TransactionType::Expense,
            amount: Decimal::from(40),
            category: "Fuel".into(),
            description: String::new(),
        },
    ]);
    assert_eq!(state.filtered_transactions().len(), 2);

    state.select_period(2024, PeriodSelector::Q1);
    assert_eq!(state.filtered_transactions()[0].id, 1);

    state.select_period(2024, PeriodSelector::Year);
    state.set_search(Some("fuel".into()));
    let out = state.filtered_transactions();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 2);
}

#[test]
fn visibility_is_kept_per_record_kind() {
    let mut state = AppState::new(Selection::new(Period::whole_year(2024), None));
    let mut vis = ColumnVisibility::new();
    vis.hide("driver");
    state.set_visibility::<Tour>(vis);
    assert!(!state.visibility::<Tour>().is_visible("driver"));
    assert!(state.visibility::<FinancialTransaction>().is_visible("driver"));
}
