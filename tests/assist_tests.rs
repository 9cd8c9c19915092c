// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::error::TextGenError;
use fleetdesk::textgen::{
    AddressInsights, AddressInsightsRequest, HttpTextGenerator, RouteRequest, RouteSuggestion,
    TextGenerator, decode,
};
use fleetdesk::{cli, commands::assist, db};
use rusqlite::Connection;
use std::cell::RefCell;

#[derive(Default)]
struct StubGenerator {
    fail: bool,
    seen_routes: RefCell<Vec<RouteRequest>>,
}

impl TextGenerator for StubGenerator {
    fn address_insights(
        &self,
        req: &AddressInsightsRequest,
    ) -> Result<AddressInsights, TextGenError> {
        req.validate()?;
        if self.fail {
            return Err(TextGenError::Status(503));
        }
        Ok(AddressInsights {
            insights: format!("Loading dock at {} closes at 16:00.", req.address),
        })
    }

    fn route_suggestion(&self, req: &RouteRequest) -> Result<RouteSuggestion, TextGenError> {
        req.validate()?;
        self.seen_routes.borrow_mut().push(req.clone());
        if self.fail {
            return Err(TextGenError::Malformed("expected value".into()));
        }
        Ok(RouteSuggestion {
            suggested_route: "A1 via Bremen".into(),
            vehicle_recommendation: "Curtainsider".into(),
            estimated_time: "3h 10m".into(),
            potential_challenges: "Roadworks near Hamburg".into(),
        })
    }
}

fn assist_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["fleetdesk", "assist"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (_, m) = matches.subcommand().unwrap();
    m.clone()
}

#[test]
fn route_request_carries_all_fields() {
    let stub = StubGenerator::default();
    let m = assist_matches(&[
        "route",
        "--pickup",
        "Hamburg",
        "--delivery",
        "Berlin",
        "--vehicle",
        "40t truck",
        "--cargo",
        "12 pallets",
        "--instructions",
        "  ",
    ]);
    let (_, sub) = m.subcommand().unwrap();
    let out = assist::route(&stub, sub).unwrap();
    assert_eq!(out.estimated_time, "3h 10m");
    let seen = stub.seen_routes.borrow();
    assert_eq!(seen[0].vehicle_type, "40t truck");
    assert_eq!(seen[0].special_instructions, None);
}

#[test]
fn service_failure_becomes_a_readable_error() {
    let stub = StubGenerator {
        fail: true,
        ..Default::default()
    };
    let m = assist_matches(&["address", "--address", "Hafenstrasse 1, Hamburg"]);
    let err = assist::run(&stub, &m).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Address insights unavailable"));
    assert!(msg.contains("HTTP 503"));
}

#[test]
fn blank_address_is_rejected_before_sending() {
    let stub = StubGenerator::default();
    let m = assist_matches(&["address", "--address", "   "]);
    let (_, sub) = m.subcommand().unwrap();
    let err = assist::address(&stub, sub).unwrap_err();
    assert!(format!("{:#}", err).contains("address must not be empty"));
}

#[test]
fn requests_serialize_in_camel_case() {
    let req = RouteRequest {
        pickup_location: "Hamburg".into(),
        delivery_location: "Berlin".into(),
        vehicle_type: "Van".into(),
        cargo_details: "Parcels".into(),
        special_instructions: None,
    };
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v["pickupLocation"], "Hamburg");
    assert_eq!(v["cargoDetails"], "Parcels");
    assert!(v.get("specialInstructions").is_none());
}

#[test]
fn decode_reports_malformed_and_empty_responses() {
    let ok: RouteSuggestion = decode(
        r#"{"suggestedRoute":"A7","vehicleRecommendation":"Van","estimatedTime":"2h","potentialChallenges":"None"}"#,
    )
    .unwrap();
    assert!(ok.validate().is_ok());

    let bad = decode::<AddressInsights>("<html>502</html>").unwrap_err();
    assert!(matches!(bad, TextGenError::Malformed(_)));

    let empty: AddressInsights = decode(r#"{"insights":"  "}"#).unwrap();
    assert!(matches!(
        empty.validate(),
        Err(TextGenError::EmptyResponse("insights"))
    ));
}

#[test]
fn missing_endpoint_is_a_configuration_error() {
    if std::env::var(fleetdesk::textgen::ENDPOINT_ENV).is_ok() {
        return;
    }
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let err = HttpTextGenerator::from_config(&conn).err().unwrap();
    assert!(err.to_string().contains("not configured"));

    fleetdesk::utils::set_setting(&conn, "textgen_endpoint", "http://localhost:9/v1/").unwrap();
    let generator = HttpTextGenerator::from_config(&conn).unwrap();
    assert_eq!(generator.endpoint(), "http://localhost:9/v1");
}
