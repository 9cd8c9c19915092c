// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reporting windows: a selector tag combined with a year.
//!
//! Months are indexed from 0 (January) to 11 (December), matching the
//! selector tags `m0`..`m11`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodSelector {
    #[default]
    Year,
    FirstHalf,
    SecondHalf,
    Q1,
    Q2,
    Q3,
    Q4,
    /// 0-based month index. Out-of-range values behave like `Year`.
    Month(u32),
}

impl PeriodSelector {
    /// Parses a selector tag. Never fails: unrecognized tags fall back to `Year`.
    pub fn parse(tag: &str) -> Self {
        let norm = tag.trim().to_lowercase();
        let sel = match norm.as_str() {
            "" | "year" | "all" => Some(Self::Year),
            "h1" | "first-half" | "firsthalf" => Some(Self::FirstHalf),
            "h2" | "second-half" | "secondhalf" => Some(Self::SecondHalf),
            "q1" => Some(Self::Q1),
            "q2" => Some(Self::Q2),
            "q3" => Some(Self::Q3),
            "q4" => Some(Self::Q4),
            other => other
                .strip_prefix("month-")
                .or_else(|| other.strip_prefix("month"))
                .or_else(|| other.strip_prefix('m'))
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|n| *n < 12)
                .map(Self::Month),
        };
        sel.unwrap_or_else(|| {
            tracing::debug!("unrecognized period tag '{}', using whole year", tag);
            Self::Year
        })
    }

    /// Month indexes covered by this selector.
    pub fn months(&self) -> RangeInclusive<u32> {
        match self {
            Self::Year => 0..=11,
            Self::FirstHalf => 0..=5,
            Self::SecondHalf => 6..=11,
            Self::Q1 => 0..=2,
            Self::Q2 => 3..=5,
            Self::Q3 => 6..=8,
            Self::Q4 => 9..=11,
            Self::Month(m) if *m < 12 => *m..=*m,
            Self::Month(_) => 0..=11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub selector: PeriodSelector,
}

impl Period {
    pub fn new(year: i32, selector: PeriodSelector) -> Self {
        Self { year, selector }
    }

    pub fn whole_year(year: i32) -> Self {
        Self::new(year, PeriodSelector::Year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.selector.months().contains(&date.month0())
    }

    /// Like [`Period::contains`] for a raw stored date. Unparsable text is
    /// outside every period.
    pub fn contains_text(&self, raw: &str) -> bool {
        crate::utils::lenient_date(raw).is_some_and(|d| self.contains(d))
    }

    /// First day of the window.
    pub fn start_date(&self) -> Option<NaiveDate> {
        let first = *self.selector.months().start();
        NaiveDate::from_ymd_opt(self.year, first + 1, 1)
    }

    /// Last day of the window, inclusive.
    pub fn end_date(&self) -> Option<NaiveDate> {
        let last = *self.selector.months().end();
        let next = if last == 11 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, last + 2, 1)
        };
        next.and_then(|d| d.pred_opt())
    }

    pub fn label(&self) -> String {
        match self.selector {
            PeriodSelector::Year => format!("{}", self.year),
            PeriodSelector::FirstHalf => format!("H1 {}", self.year),
            PeriodSelector::SecondHalf => format!("H2 {}", self.year),
            PeriodSelector::Q1 => format!("Q1 {}", self.year),
            PeriodSelector::Q2 => format!("Q2 {}", self.year),
            PeriodSelector::Q3 => format!("Q3 {}", self.year),
            PeriodSelector::Q4 => format!("Q4 {}", self.year),
            PeriodSelector::Month(m) => match MONTH_NAMES.get(m as usize) {
                Some(name) => format!("{} {}", name, self.year),
                None => format!("{}", self.year),
            },
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
