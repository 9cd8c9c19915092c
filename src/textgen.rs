// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client side of the external text-generation service used by the
//! address and route assistants. One request, one response; no retries.

use crate::error::TextGenError;
use crate::utils::{get_setting, http_client};
use anyhow::Result;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_ENV: &str = "FLEETDESK_TEXTGEN_ENDPOINT";
pub const API_KEY_ENV: &str = "FLEETDESK_TEXTGEN_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInsightsRequest {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInsights {
    pub insights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub pickup_location: String,
    pub delivery_location: String,
    pub vehicle_type: String,
    pub cargo_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSuggestion {
    pub suggested_route: String,
    pub vehicle_recommendation: String,
    pub estimated_time: String,
    pub potential_challenges: String,
}

impl AddressInsightsRequest {
    pub fn validate(&self) -> Result<(), TextGenError> {
        require("address", &self.address)
    }
}

impl AddressInsights {
    pub fn validate(&self) -> Result<(), TextGenError> {
        non_empty("insights", &self.insights)
    }
}

impl RouteRequest {
    pub fn validate(&self) -> Result<(), TextGenError> {
        require("pickupLocation", &self.pickup_location)?;
        require("deliveryLocation", &self.delivery_location)?;
        require("vehicleType", &self.vehicle_type)?;
        require("cargoDetails", &self.cargo_details)
    }
}

impl RouteSuggestion {
    pub fn validate(&self) -> Result<(), TextGenError> {
        non_empty("suggestedRoute", &self.suggested_route)?;
        non_empty("vehicleRecommendation", &self.vehicle_recommendation)?;
        non_empty("estimatedTime", &self.estimated_time)?;
        non_empty("potentialChallenges", &self.potential_challenges)
    }
}

fn require(field: &str, value: &str) -> Result<(), TextGenError> {
    if value.trim().is_empty() {
        return Err(TextGenError::InvalidRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn non_empty(field: &'static str, value: &str) -> Result<(), TextGenError> {
    if value.trim().is_empty() {
        return Err(TextGenError::EmptyResponse(field));
    }
    Ok(())
}

pub trait TextGenerator {
    fn address_insights(&self, req: &AddressInsightsRequest)
    -> Result<AddressInsights, TextGenError>;

    fn route_suggestion(&self, req: &RouteRequest) -> Result<RouteSuggestion, TextGenError>;
}

pub struct HttpTextGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTextGenerator {
    pub fn new(endpoint: &str, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Endpoint from the environment, then the `textgen_endpoint` setting.
    pub fn from_config(conn: &Connection) -> Result<Self> {
        let endpoint = match std::env::var(ENDPOINT_ENV).ok().filter(|s| !s.trim().is_empty()) {
            Some(e) => e,
            None => get_setting(conn, "textgen_endpoint")?
                .filter(|s| !s.trim().is_empty())
                .ok_or(TextGenError::NotConfigured)?,
        };
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self::new(&endpoint, api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, TextGenError> {
        let url = format!("{}/{}", self.endpoint, path);
        tracing::debug!("POST {}", url);
        let mut rb = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            rb = rb.bearer_auth(key);
        }
        let resp = rb.send()?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("text generation at {} failed with {}", url, status);
            return Err(TextGenError::Status(status.as_u16()));
        }
        let text = resp.text()?;
        decode(&text)
    }
}

/// Parses a service response body.
pub fn decode<Resp: DeserializeOwned>(body: &str) -> Result<Resp, TextGenError> {
    serde_json::from_str(body).map_err(|e| TextGenError::Malformed(e.to_string()))
}

impl TextGenerator for HttpTextGenerator {
    fn address_insights(
        &self,
        req: &AddressInsightsRequest,
    ) -> Result<AddressInsights, TextGenError> {
        req.validate()?;
        let out: AddressInsights = self.post("address-insights", req)?;
        out.validate()?;
        Ok(out)
    }

    fn route_suggestion(&self, req: &RouteRequest) -> Result<RouteSuggestion, TextGenError> {
        req.validate()?;
        let out: RouteSuggestion = self.post("route-suggestion", req)?;
        out.validate()?;
        Ok(out)
    }
}
