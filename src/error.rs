// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejected command-line or stored values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("unknown column '{column}' for {report} report")]
    UnknownColumn { report: &'static str, column: String },

    #[error("unknown report '{0}' (use transactions|tours|transports|invoices)")]
    UnknownReport(String),
}

/// Failures of the external text-generation service.
#[derive(Error, Debug)]
pub enum TextGenError {
    #[error("text generation is not configured (set textgen_endpoint or FLEETDESK_TEXTGEN_ENDPOINT)")]
    NotConfigured,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("service returned an empty '{0}'")]
    EmptyResponse(&'static str),
}
