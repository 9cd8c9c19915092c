// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod tours;
pub mod transports;
pub mod invoices;
pub mod analytics;
pub mod reports;
pub mod assist;
pub mod settings;
pub mod seed;

use crate::period::{Period, PeriodSelector};
use crate::state::Selection;
use crate::utils::current_year;
use anyhow::{Result, anyhow};

/// Year, period tag and search term shared by listing and report commands.
pub fn selection(sub: &clap::ArgMatches) -> Selection {
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(current_year);
    let selector = sub
        .get_one::<String>("period")
        .map(|s| PeriodSelector::parse(s))
        .unwrap_or_default();
    Selection::new(
        Period::new(year, selector),
        sub.get_one::<String>("search").cloned(),
    )
}

pub fn required_arg(sub: &clap::ArgMatches, name: &str) -> Result<String> {
    sub.get_one::<String>(name)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow!("Missing --{}", name))
}

pub fn json_flags(sub: &clap::ArgMatches) -> (bool, bool) {
    (sub.get_flag("json"), sub.get_flag("jsonl"))
}
