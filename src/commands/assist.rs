// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required_arg;
use crate::textgen::{
    AddressInsights, AddressInsightsRequest, HttpTextGenerator, RouteRequest, RouteSuggestion,
    TextGenerator,
};
use crate::utils::{opt_text, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if m.subcommand().is_none() {
        return Ok(());
    }
    let generator = HttpTextGenerator::from_config(conn)?;
    run(&generator, m)
}

pub fn run(generator: &dyn TextGenerator, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("address", sub)) => {
            let out = address(generator, sub)?;
            println!("{}", out.insights.trim());
        }
        Some(("route", sub)) => {
            let out = route(generator, sub)?;
            println!(
                "{}",
                pretty_table(
                    &["Aspect", "Suggestion"],
                    vec![
                        vec!["Route".into(), out.suggested_route],
                        vec!["Vehicle".into(), out.vehicle_recommendation],
                        vec!["Estimated time".into(), out.estimated_time],
                        vec!["Challenges".into(), out.potential_challenges],
                    ],
                )
            );
        }
        _ => {}
    }
    Ok(())
}

pub fn address(generator: &dyn TextGenerator, sub: &clap::ArgMatches) -> Result<AddressInsights> {
    let req = AddressInsightsRequest {
        address: required_arg(sub, "address")?,
    };
    generator
        .address_insights(&req)
        .context("Address insights unavailable")
}

pub fn route(generator: &dyn TextGenerator, sub: &clap::ArgMatches) -> Result<RouteSuggestion> {
    let req = RouteRequest {
        pickup_location: required_arg(sub, "pickup")?,
        delivery_location: required_arg(sub, "delivery")?,
        vehicle_type: required_arg(sub, "vehicle")?,
        cargo_details: required_arg(sub, "cargo")?,
        special_instructions: opt_text(sub.get_one::<String>("instructions")),
    };
    generator
        .route_suggestion(&req)
        .context("Route suggestion unavailable")
}
