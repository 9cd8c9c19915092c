// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetdesk::error::InputError;
use fleetdesk::models::{Transport, TransportStatus};
use fleetdesk::projection::{ColumnVisibility, ReportTable, check_columns, project};
use fleetdesk::record::Record;

fn transport(number: &str) -> Transport {
    Transport {
        id: 7,
        transport_number: number.into(),
        customer: "Rhein Cargo".into(),
        pickup_location: "Cologne".into(),
        delivery_location: "Rotterdam".into(),
        planned_delivery_date: "2024-08-02T09:00".into(),
        actual_delivery_date: None,
        status: TransportStatus::InTransit,
        driver: Some("S. Braun".into()),
        vehicle: Some("LKW-03".into()),
    }
}

#[test]
fn default_visibility_projects_every_column_in_schema_order() {
    let rows = project(&[transport("TR-1")], &ColumnVisibility::new());
    let keys: Vec<&str> = rows[0].cells.iter().map(|(k, _)| *k).collect();
    let schema: Vec<&str> = Transport::columns().iter().map(|c| c.key).collect();
    assert_eq!(keys, schema);
    assert_eq!(rows[0].get("status"), Some("In transit"));
    assert_eq!(rows[0].get("actual"), Some(""));
}

#[test]
fn hidden_columns_are_dropped_and_order_follows_schema() {
    let mut vis = ColumnVisibility::new();
    // insertion order of the mapping must not matter
    vis.show("vehicle");
    vis.hide("id");
    vis.show("customer");
    vis.hide("pickup");
    vis.hide("delivery");
    let rows = project(&[transport("TR-1")], &vis);
    let keys: Vec<&str> = rows[0].cells.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["number", "customer", "planned", "actual", "status", "driver", "vehicle"]
    );
}

#[test]
fn only_keeps_requested_columns() {
    let vis = ColumnVisibility::only::<Transport>(&["status", "number"]);
    let table = ReportTable::build(&[transport("TR-1"), transport("TR-2")], &vis);
    assert_eq!(table.headers, vec!["Transport No.", "Status"]);
    assert_eq!(table.rows[1].values(), vec!["TR-2".to_string(), "In transit".to_string()]);
}

#[test]
fn setting_visibility_is_idempotent_and_toggle_flips() {
    let mut vis = ColumnVisibility::new();
    vis.hide("driver");
    let once = vis.clone();
    vis.hide("driver");
    assert_eq!(vis, once);
    vis.toggle("driver");
    assert!(vis.is_visible("driver"));
    vis.toggle("driver");
    assert!(!vis.is_visible("driver"));
}

#[test]
fn all_hidden_yields_empty_rows_without_failing() {
    let mut vis = ColumnVisibility::new();
    for c in Transport::columns() {
        vis.hide(c.key);
    }
    let data = vec![transport("TR-1")];
    let table = ReportTable::build(&data, &vis);
    assert!(table.headers.is_empty());
    assert_eq!(table.rows.len(), 1);
    assert!(table.rows[0].cells.is_empty());
    let _ = table.to_table().to_string();
    // projection leaves the records untouched
    assert_eq!(data[0], transport("TR-1"));
}

#[test]
fn rows_serialize_as_ordered_objects() {
    let vis = ColumnVisibility::only::<Transport>(&["status", "number", "customer"]);
    let rows = project(&[transport("TR-9")], &vis);
    let json = serde_json::to_string(&rows).unwrap();
    assert_eq!(
        json,
        r#"[{"number":"TR-9","customer":"Rhein Cargo","status":"In transit"}]"#
    );
}

#[test]
fn unknown_column_keys_are_rejected() {
    let err = check_columns::<Transport>(&["number".into(), "colour".into()]).unwrap_err();
    assert_eq!(
        err,
        InputError::UnknownColumn {
            report: "transports",
            column: "colour".into()
        }
    );
    assert!(check_columns::<Transport>(&[]).is_ok());
}
