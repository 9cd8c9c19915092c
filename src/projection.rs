// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::InputError;
use crate::record::{Column, Record};
use crate::utils::pretty_table;
use comfy_table::Table;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Per-column visibility. Columns without an entry are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    flags: BTreeMap<String, bool>,
}

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the listed keys are visible.
    pub fn only<R: Record>(keys: &[&str]) -> Self {
        let mut v = Self::new();
        for c in R::columns() {
            v.set(c.key, keys.contains(&c.key));
        }
        v
    }

    pub fn set(&mut self, key: &str, visible: bool) {
        self.flags.insert(key.to_string(), visible);
    }

    pub fn hide(&mut self, key: &str) {
        self.set(key, false);
    }

    pub fn show(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn toggle(&mut self, key: &str) {
        let next = !self.is_visible(key);
        self.set(key, next);
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(true)
    }

    /// Visible columns of `R` in canonical order.
    pub fn visible_columns<R: Record>(&self) -> Vec<&'static Column> {
        R::columns()
            .iter()
            .filter(|c| self.is_visible(c.key))
            .collect()
    }
}

/// Rejects column keys the record kind does not have.
pub fn check_columns<R: Record>(keys: &[String]) -> Result<(), InputError> {
    match keys.iter().find(|k| !R::has_column(k)) {
        Some(bad) => Err(InputError::UnknownColumn {
            report: R::KIND,
            column: bad.clone(),
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    pub cells: Vec<(&'static str, String)>,
}

impl ProjectedRow {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn values(&self) -> Vec<String> {
        self.cells.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl Serialize for ProjectedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

pub fn project<R: Record>(items: &[R], visibility: &ColumnVisibility) -> Vec<ProjectedRow> {
    let columns = visibility.visible_columns::<R>();
    items
        .iter()
        .map(|item| ProjectedRow {
            cells: columns
                .iter()
                .map(|c| (c.key, item.cell(c.key).unwrap_or_default()))
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct ReportTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<ProjectedRow>,
}

impl ReportTable {
    pub fn build<R: Record>(items: &[R], visibility: &ColumnVisibility) -> Self {
        let headers = visibility
            .visible_columns::<R>()
            .iter()
            .map(|c| c.label)
            .collect();
        Self {
            headers,
            rows: project(items, visibility),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_table(&self) -> Table {
        let rows = self.rows.iter().map(ProjectedRow::values).collect();
        pretty_table(&self.headers, rows)
    }
}
