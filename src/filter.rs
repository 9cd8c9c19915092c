// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::period::Period;
use crate::record::Record;

/// Records inside `period` that match `term`, in input order.
///
/// A missing or blank term matches everything. Records whose period date
/// cannot be parsed are never returned.
pub fn filter_records<R: Record + Clone>(
    items: &[R],
    period: &Period,
    term: Option<&str>,
) -> Vec<R> {
    let needle = term
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());
    items
        .iter()
        .filter(|r| r.period_date().is_some_and(|d| period.contains(d)))
        .filter(|r| match needle.as_deref() {
            Some(n) => matches_term(*r, n),
            None => true,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match over the record's searchable columns.
pub fn matches_search<R: Record>(item: &R, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    needle.is_empty() || matches_term(item, &needle)
}

fn matches_term<R: Record>(item: &R, needle: &str) -> bool {
    R::searchable()
        .iter()
        .filter_map(|key| item.cell(key))
        .any(|v| v.to_lowercase().contains(needle))
}
