// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON request/response model.
//!
//! A request document is either one [`RouteRequest`] object or an array of them. Batches
//! are routed in parallel; every request owns its obstacle snapshot, so they share nothing.

use rayon::prelude::*;
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::RouterConfig;
use crate::error::RouteError;
use crate::geometry::{Point, Rect};
use crate::obstacles::Obstacles;
use crate::route::Route;
use crate::router::{compose, Endpoint};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("obstacle {index} has a non-finite coordinate")]
    InvalidObstacle { index: usize },

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl RequestError {
    /// `true` when the input was well-formed but no route exists within the budget.
    pub fn is_routing_failure(&self) -> bool {
        matches!(self, Self::Route(RouteError::Hop { .. }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteRequest {
    pub obstacles: Vec<Rect>,
    pub start: Endpoint,
    pub end: Endpoint,
    #[serde(default)]
    pub waypoints: Vec<Point>,
    #[serde(default)]
    pub options: RouterConfig,
}

impl RouteRequest {
    pub fn execute(&self) -> Result<RouteResponse, RequestError> {
        if let Some(index) = self.obstacles.iter().position(|rect| !rect.is_finite()) {
            return Err(RequestError::InvalidObstacle { index });
        }
        let obstacles = self.obstacles.iter().copied().collect::<Obstacles>();
        let route = compose(&obstacles, &self.start, &self.waypoints, &self.end, &self.options)?;
        Ok(RouteResponse::from(route))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteResponse {
    pub points: Route,
    pub length: f64,
    pub vertex_count: usize,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self { length: route.length(), vertex_count: route.len(), points: route }
    }
}

/// One request or a batch, as found in a request document.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestDocument {
    Single(RouteRequest),
    Batch(Vec<RouteRequest>),
}

impl RequestDocument {
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        let value = serde_json::from_str::<serde_json::Value>(input)?;
        if value.is_array() {
            Ok(Self::Batch(serde_json::from_value(value)?))
        } else {
            Ok(Self::Single(serde_json::from_value(value)?))
        }
    }

    pub fn requests_mut(&mut self) -> &mut [RouteRequest] {
        match self {
            Self::Single(request) => std::slice::from_mut(request),
            Self::Batch(requests) => requests,
        }
    }
}

/// Routes every request of a batch in parallel; results keep the input order.
pub fn execute_batch(requests: &[RouteRequest]) -> Vec<Result<RouteResponse, RequestError>> {
    debug!(requests = requests.len(), "routing batch");
    requests.par_iter().map(RouteRequest::execute).collect()
}

/// Serialized form of one batch entry.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Routed(RouteResponse),
    Failed { error: String },
}

impl From<Result<RouteResponse, RequestError>> for BatchEntry {
    fn from(result: Result<RouteResponse, RequestError>) -> Self {
        match result {
            Ok(response) => Self::Routed(response),
            Err(err) => Self::Failed { error: err.to_string() },
        }
    }
}

/// JSON schema of a single [`RouteRequest`].
pub fn request_schema() -> Schema {
    schemars::schema_for!(RouteRequest)
}
