// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod error;
pub mod models;
pub mod utils;
pub mod commands;

pub mod period;
pub mod record;
pub mod filter;
pub mod aggregate;
pub mod kpi;
pub mod projection;
pub mod state;
pub mod textgen;
