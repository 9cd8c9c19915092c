// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required_arg;
use crate::error::InputError;
use crate::textgen::{API_KEY_ENV, ENDPOINT_ENV};
use crate::utils::{get_currency, get_setting, pretty_table, set_setting};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", _)) => show(conn)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let key = required_arg(sub, "key")?.to_lowercase();
    let mut value = required_arg(sub, "value")?;
    match key.as_str() {
        "currency" => value = value.to_uppercase(),
        "textgen_endpoint" => {}
        _ => {
            return Err(InputError::UnknownValue {
                kind: "setting",
                value: key,
            }
            .into());
        }
    }
    set_setting(conn, &key, &value)?;
    println!("{} set to {}", key, value);
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let endpoint = get_setting(conn, "textgen_endpoint")?.unwrap_or_default();
    let env_endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_default();
    let key_state = if std::env::var(API_KEY_ENV).is_ok() {
        "set"
    } else {
        "not set"
    };
    let rows = vec![
        vec!["currency".into(), get_currency(conn)?],
        vec!["textgen_endpoint".into(), endpoint],
        vec![ENDPOINT_ENV.into(), env_endpoint],
        vec![API_KEY_ENV.into(), key_state.into()],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
