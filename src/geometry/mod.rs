// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Planar geometry primitives used by the router.
//!
//! Everything here is plain `f64` arithmetic without tolerances. The only epsilon in the
//! crate lives in the grid search goal test.

mod intersect;

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

pub use intersect::segments_intersect;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `|dx| + |dy|` between the two points.
    pub fn manhattan(&self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// True when both points share an x or a y coordinate.
    pub fn is_axis_aligned_with(&self, other: Point) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A displacement or direction in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const UP: Vector = Vector::new(0.0, 1.0);
    pub const DOWN: Vector = Vector::new(0.0, -1.0);
    pub const RIGHT: Vector = Vector::new(1.0, 0.0);
    pub const LEFT: Vector = Vector::new(-1.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3-D cross product.
    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector with the same heading, or `None` for zero and non-finite vectors.
    pub fn normalized(&self) -> Option<Vector> {
        if !self.is_finite() || self.is_zero() {
            return None;
        }
        let len = self.length();
        if !len.is_finite() || len == 0.0 {
            return None;
        }
        Some(Vector::new(self.x / len, self.y / len))
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Whether the two segments touch, cross or overlap. See [`segments_intersect`].
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

/// Axis-aligned rectangle, typically a component bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectBounds", into = "RectBounds")]
pub struct Rect {
    min: Point,
    max: Point,
}

/// Serialized form of [`Rect`]. Corners given in any order are normalized on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RectBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::from_corners(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Closed containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// The four boundary segments, ordered `(p,q), (p,r), (r,s), (q,s)` where `p` is the
    /// lower-left corner, `q` upper-left, `r` lower-right and `s` upper-right.
    pub fn boundary(&self) -> [Segment; 4] {
        let p = self.min;
        let q = Point::new(self.min.x, self.max.y);
        let r = Point::new(self.max.x, self.min.y);
        let s = self.max;
        [Segment::new(p, q), Segment::new(p, r), Segment::new(r, s), Segment::new(q, s)]
    }

    /// Whether any boundary edge touches the segment.
    ///
    /// A segment lying strictly inside the rectangle does not touch the boundary and is
    /// therefore not reported.
    pub fn boundary_intersects(&self, segment: &Segment) -> bool {
        self.boundary().iter().any(|edge| edge.intersects(segment))
    }
}

impl JsonSchema for Rect {
    fn schema_name() -> Cow<'static, str> {
        "Rect".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        RectBounds::json_schema(generator)
    }
}

impl From<RectBounds> for Rect {
    fn from(value: RectBounds) -> Self {
        Rect::new(value.min_x, value.min_y, value.max_x, value.max_y)
    }
}

impl From<Rect> for RectBounds {
    fn from(value: Rect) -> Self {
        RectBounds {
            min_x: value.min.x,
            min_y: value.min.y,
            max_x: value.max.x,
            max_y: value.max.y,
        }
    }
}
