// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application state owned by the shell: loaded collections, the current
//! selection and column visibility. The reporting functions it calls stay
//! pure; this layer only remembers the last filtered view of each
//! collection.

use crate::db;
use crate::filter::filter_records;
use crate::models::{FinancialTransaction, Invoice, Tour, Transport};
use crate::period::{Period, PeriodSelector};
use crate::projection::ColumnVisibility;
use crate::record::Record;
use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub period: Period,
    pub search: Option<String>,
}

impl Selection {
    pub fn new(period: Period, search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self { period, search }
    }
}

/// Single-entry cache: keeps the value computed for the most recent key.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    hits: usize,
    misses: usize,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((k, v)) = &self.entry {
            if *k == key {
                self.hits += 1;
                return v.clone();
            }
        }
        self.misses += 1;
        let v = compute();
        self.entry = Some((key, v.clone()));
        v
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

/// A collection plus a revision counter bumped on every replacement.
#[derive(Debug)]
pub struct Collection<R> {
    items: Vec<R>,
    revision: u64,
    memo: Memo<(u64, Selection), Vec<R>>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
            memo: Memo::default(),
        }
    }
}

impl<R: Record + Clone> Collection<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn replace(&mut self, items: Vec<R>) {
        self.items = items;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn filtered(&mut self, sel: &Selection) -> Vec<R> {
        let items = &self.items;
        self.memo
            .get_or_compute((self.revision, sel.clone()), || {
                filter_records(items, &sel.period, sel.search.as_deref())
            })
    }

    pub fn memo(&self) -> &Memo<(u64, Selection), Vec<R>> {
        &self.memo
    }
}

#[derive(Debug)]
pub struct AppState {
    pub selection: Selection,
    pub transactions: Collection<FinancialTransaction>,
    pub tours: Collection<Tour>,
    pub transports: Collection<Transport>,
    pub invoices: Collection<Invoice>,
    visibility: HashMap<&'static str, ColumnVisibility>,
}

impl AppState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            transactions: Collection::default(),
            tours: Collection::default(),
            transports: Collection::default(),
            invoices: Collection::default(),
            visibility: HashMap::new(),
        }
    }

    /// Loads every collection from the store.
    pub fn load(conn: &Connection, selection: Selection) -> Result<Self> {
        let mut state = Self::new(selection);
        state.transactions.replace(db::load_transactions(conn)?);
        state.tours.replace(db::load_tours(conn)?);
        state.transports.replace(db::load_transports(conn)?);
        state.invoices.replace(db::load_invoices(conn)?);
        tracing::debug!(
            transactions = state.transactions.items().len(),
            tours = state.tours.items().len(),
            transports = state.transports.items().len(),
            invoices = state.invoices.items().len(),
            "loaded collections"
        );
        Ok(state)
    }

    pub fn select_period(&mut self, year: i32, selector: PeriodSelector) {
        self.selection.period = Period::new(year, selector);
    }

    pub fn set_search(&mut self, term: Option<String>) {
        self.selection = Selection::new(self.selection.period, term);
    }

    pub fn visibility<R: Record>(&self) -> ColumnVisibility {
        self.visibility.get(R::KIND).cloned().unwrap_or_default()
    }

    pub fn set_visibility<R: Record>(&mut self, visibility: ColumnVisibility) {
        self.visibility.insert(R::KIND, visibility);
    }

    pub fn filtered_transactions(&mut self) -> Vec<FinancialTransaction> {
        self.transactions.filtered(&self.selection)
    }

    pub fn filtered_tours(&mut self) -> Vec<Tour> {
        self.tours.filtered(&self.selection)
    }

    pub fn filtered_transports(&mut self) -> Vec<Transport> {
        self.transports.filtered(&self.selection)
    }

    pub fn filtered_invoices(&mut self) -> Vec<Invoice> {
        self.invoices.filtered(&self.selection)
    }
}
