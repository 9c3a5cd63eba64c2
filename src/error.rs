// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Error types for routing.
//!
//! A blocked direct/elbow attempt is not an error (it only triggers the grid search), so
//! the taxonomy here covers rejected inputs and failed searches.

use std::fmt;

use thiserror::Error;

use crate::geometry::Point;

/// Rejected [`RouterConfig`](crate::config::RouterConfig) values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("step size must be a positive finite number, got {value}")]
    NonPositiveStepSize { value: f64 },

    #[error("{field} must be a non-negative finite number, got {value}")]
    NegativeLength { field: &'static str, value: f64 },

    #[error("max_expansions must be at least 1")]
    ZeroExpansionBudget,
}

/// Why a grid search hop produced no route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Every reachable lattice point was explored without reaching the goal.
    #[error("search frontier exhausted after {expansions} expansions")]
    Exhausted { expansions: usize },

    #[error("search budget of {limit} expansions exceeded")]
    BudgetExceeded { limit: usize },

    /// A compacted or goal-snapped segment failed the final clearance check.
    #[error("routed segment {from} -> {to} touches an obstacle")]
    ClearanceViolation { from: Point, to: Point },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    End,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("invalid router configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid {role} endpoint: {reason}")]
    InvalidEndpoint { role: EndpointRole, reason: &'static str },

    #[error("waypoint {index} has a non-finite coordinate")]
    InvalidWaypoint { index: usize },

    /// Hop `hop` (0-based, lead-in point to first target) could not be routed.
    #[error("hop {hop} from {from} to {to} failed: {source}")]
    Hop {
        hop: usize,
        from: Point,
        to: Point,
        #[source]
        source: SearchError,
    },
}

impl RouteError {
    /// The underlying search failure, if this error came from a failed hop.
    pub fn search_error(&self) -> Option<&SearchError> {
        match self {
            Self::Hop { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
