// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The routed polyline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Segment, Vector};

/// An ordered polyline built incrementally by the routers.
///
/// Appending never creates a zero-length segment, and a point that extends the last
/// segment in the same heading moves the tail instead of adding a vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_start(start: Point) -> Self {
        Self { points: vec![start] }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut route = Self::new();
        for point in points {
            route.push(point);
        }
        route
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Direction of the final segment, if there is one.
    pub fn heading(&self) -> Option<Vector> {
        match self.points.as_slice() {
            [.., prev, last] => Some(*last - *prev),
            _ => None,
        }
    }

    pub fn push(&mut self, point: Point) {
        let Some(&last) = self.points.last() else {
            self.points.push(point);
            return;
        };
        if last == point {
            return;
        }

        if let Some(heading) = self.heading() {
            let next = point - last;
            if heading.cross(next) == 0.0 && heading.dot(next) > 0.0 {
                if let Some(tail) = self.points.last_mut() {
                    *tail = point;
                }
                return;
            }
        }

        self.points.push(point);
    }

    /// Appends a hop that starts at this route's last point, skipping the shared vertex.
    pub fn append_hop(&mut self, hop: &Route) {
        let skip = usize::from(!self.is_empty() && hop.first() == self.last());
        for point in hop.points.iter().skip(skip) {
            self.push(*point);
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Total Euclidean length.
    pub fn length(&self) -> f64 {
        self.segments().map(|segment| segment.length()).sum()
    }
}

impl From<Route> for Vec<Point> {
    fn from(route: Route) -> Self {
        route.points
    }
}
