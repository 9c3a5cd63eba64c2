// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Obstacle snapshots queried by the routers.
//!
//! The routers only ever ask one question: "does this candidate segment touch any obstacle
//! boundary?". [`ObstacleIndex`] captures that question so the linear scan in [`Obstacles`]
//! can be swapped for a spatial index without touching the callers.

use tracing::trace;

use crate::geometry::{Rect, Segment};

/// Clearance oracle for candidate route segments.
pub trait ObstacleIndex {
    /// Returns `true` iff no obstacle boundary intersects or overlaps `segment`.
    fn is_clear(&self, segment: &Segment) -> bool;
}

impl<T: ObstacleIndex + ?Sized> ObstacleIndex for &T {
    fn is_clear(&self, segment: &Segment) -> bool {
        (**self).is_clear(segment)
    }
}

/// Immutable set of axis-aligned obstacle rectangles, scanned linearly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Obstacles {
    rects: Vec<Rect>,
}

impl Obstacles {
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.rects.iter()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// The first rectangle (in insertion order) whose boundary the segment touches.
    pub fn first_blocking(&self, segment: &Segment) -> Option<&Rect> {
        self.rects.iter().find(|rect| rect.boundary_intersects(segment))
    }
}

impl ObstacleIndex for Obstacles {
    fn is_clear(&self, segment: &Segment) -> bool {
        match self.first_blocking(segment) {
            Some(rect) => {
                trace!(from = %segment.start, to = %segment.end, ?rect, "segment blocked");
                false
            }
            None => true,
        }
    }
}

impl FromIterator<Rect> for Obstacles {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self { rects: iter.into_iter().collect() }
    }
}

impl From<Vec<Rect>> for Obstacles {
    fn from(rects: Vec<Rect>) -> Self {
        Self::new(rects)
    }
}

#[cfg(test)]
mod tests {
    use super::{ObstacleIndex, Obstacles};
    use crate::geometry::{Point, Rect, Segment};

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn empty_index_clears_everything() {
        let obstacles = Obstacles::default();
        assert!(obstacles.is_empty());
        assert!(obstacles.is_clear(&seg(-100.0, 0.0, 100.0, 0.0)));
    }

    #[test]
    fn reports_first_blocking_rect_in_insertion_order() {
        let obstacles: Obstacles =
            [Rect::new(5.0, -1.0, 6.0, 1.0), Rect::new(1.0, -1.0, 2.0, 1.0)]
                .into_iter()
                .collect();

        let through_both = seg(0.0, 0.0, 10.0, 0.0);
        assert!(!obstacles.is_clear(&through_both));
        assert_eq!(obstacles.first_blocking(&through_both), Some(&Rect::new(5.0, -1.0, 6.0, 1.0)));

        let between = seg(3.0, -5.0, 3.0, 5.0);
        assert!(obstacles.is_clear(&between));
        assert_eq!(obstacles.first_blocking(&between), None);
    }

    #[test]
    fn order_of_obstacles_does_not_change_clearance() {
        let rects = vec![
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(2.0, 2.0, 3.0, 3.0),
            Rect::new(-4.0, 1.0, -3.0, 6.0),
        ];
        let forward = Obstacles::new(rects.clone());
        let backward = Obstacles::new(rects.into_iter().rev().collect());

        for candidate in [
            seg(-5.0, 0.5, 5.0, 0.5),
            seg(1.5, -1.0, 1.5, 5.0),
            seg(3.0, 3.0, 4.0, 4.0),
            seg(-2.0, 0.0, -2.0, 9.0),
        ] {
            assert_eq!(forward.is_clear(&candidate), backward.is_clear(&candidate));
        }
    }

    #[test]
    fn borrowed_index_delegates() {
        fn clear_via<I: ObstacleIndex>(index: I, segment: &Segment) -> bool {
            index.is_clear(segment)
        }

        let obstacles = Obstacles::new(vec![Rect::new(0.0, 0.0, 1.0, 1.0)]);
        assert!(!clear_via(&obstacles, &seg(-1.0, 0.0, 0.0, 0.0)));
        assert!(clear_via(&obstacles, &seg(-1.0, 2.0, 2.0, 2.0)));
    }
}
