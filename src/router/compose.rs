// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chains lead-in, waypoint hops and lead-out into one route.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{direct, grid};
use crate::config::RouterConfig;
use crate::error::{ConfigError, EndpointRole, Result, RouteError};
use crate::geometry::{Point, Vector};
use crate::obstacles::ObstacleIndex;
use crate::route::Route;

/// A connection point on a component, with the outward normal the trace leaves along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Endpoint {
    pub position: Point,
    /// Outward direction; any non-zero length is accepted and normalized when routing.
    pub normal: Vector,
}

impl Endpoint {
    pub fn new(position: Point, normal: Vector) -> Self {
        Self { position, normal }
    }

    /// Checks the coordinates and returns the unit normal.
    pub fn unit_normal(&self, role: EndpointRole) -> Result<Vector> {
        if !self.position.is_finite() {
            return Err(RouteError::InvalidEndpoint { role, reason: "non-finite position" });
        }
        if !self.normal.is_finite() {
            return Err(RouteError::InvalidEndpoint { role, reason: "non-finite normal" });
        }
        self.normal
            .normalized()
            .ok_or(RouteError::InvalidEndpoint { role, reason: "zero normal" })
    }

    /// `position + unit_normal * offset`.
    pub fn lead_point(&self, unit_normal: Vector, offset: f64) -> Point {
        self.position + unit_normal * offset
    }
}

/// Routes from `start` through every waypoint, in order, to `end`.
///
/// The route opens with the lead-in stub along the start normal and closes with the
/// lead-out stub back into `end`. The stubs themselves are not clearance checked since
/// they start on the host component's own outline. Every hop in between first tries
/// [`direct::try_direct`] and falls back to [`grid::search`]. The first hop is steered by
/// the start normal, every later one by its displacement toward the target.
pub fn compose<I>(
    obstacles: &I,
    start: &Endpoint,
    waypoints: &[Point],
    end: &Endpoint,
    config: &RouterConfig,
) -> Result<Route>
where
    I: ObstacleIndex + ?Sized,
{
    config.validate()?;
    let start_normal = start.unit_normal(EndpointRole::Start)?;
    let end_normal = end.unit_normal(EndpointRole::End)?;
    if let Some(index) = waypoints.iter().position(|waypoint| !waypoint.is_finite()) {
        return Err(RouteError::InvalidWaypoint { index });
    }

    let lead_in = start.lead_point(start_normal, config.lead_in_offset());
    let lead_out = end.lead_point(end_normal, config.lead_out_offset());

    let mut route = Route::from_points([start.position, lead_in]);
    let targets = waypoints.iter().copied().chain(std::iter::once(lead_out));
    for (hop, target) in targets.enumerate() {
        let Some(from) = route.last() else {
            break;
        };
        if from == target {
            continue;
        }

        // The first hop leaves along the lead-in; later hops head for their target.
        let direction = if hop == 0 { start_normal } else { target - from };
        let leg = match direct::try_direct(obstacles, direction, from, target) {
            Some(leg) => {
                debug!(hop, %from, %target, vertices = leg.len(), "hop routed directly");
                leg
            }
            None => grid::search(
                obstacles,
                direction,
                from,
                target,
                config.step_size,
                config.max_expansions,
            )
            .map_err(|source| RouteError::Hop { hop, from, to: target, source })?,
        };
        route.append_hop(&leg);
    }

    route.push(end.position);
    debug!(
        waypoints = waypoints.len(),
        vertices = route.len(),
        length = route.length(),
        "route composed"
    );
    Ok(route)
}

/// An obstacle snapshot paired with a validated configuration.
#[derive(Debug, Clone)]
pub struct Router<I> {
    obstacles: I,
    config: RouterConfig,
}

impl<I: ObstacleIndex> Router<I> {
    pub fn new(obstacles: I, config: RouterConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { obstacles, config })
    }

    pub fn obstacles(&self) -> &I {
        &self.obstacles
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn route(&self, start: &Endpoint, waypoints: &[Point], end: &Endpoint) -> Result<Route> {
        compose(&self.obstacles, start, waypoints, end, &self.config)
    }
}
