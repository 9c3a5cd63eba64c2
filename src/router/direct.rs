// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::trace;

use crate::geometry::{Point, Segment, Vector};
use crate::obstacles::ObstacleIndex;
use crate::route::Route;

/// Tries to connect `start` and `end` with a straight segment, an elbow, or a symmetric
/// three-segment path, in that order.
///
/// Returns `None` when the displacement opposes `start_direction` or every candidate
/// touches an obstacle; the caller then falls back to the grid search.
pub fn try_direct<I>(
    obstacles: &I,
    start_direction: Vector,
    start: Point,
    end: Point,
) -> Option<Route>
where
    I: ObstacleIndex + ?Sized,
{
    if start_direction.dot(end - start) < 0.0 {
        trace!(%start, %end, "direct hop opposes the outgoing direction");
        return None;
    }

    let clear = |a: Point, b: Point| obstacles.is_clear(&Segment::new(a, b));
    let path_clear = |points: &[Point]| points.windows(2).all(|pair| clear(pair[0], pair[1]));

    if start.is_axis_aligned_with(end) && clear(start, end) {
        return Some(Route::from_points([start, end]));
    }

    for bend in [Point::new(start.x, end.y), Point::new(end.x, start.y)] {
        let candidate = [start, bend, end];
        if path_clear(&candidate) {
            return Some(Route::from_points(candidate));
        }
    }

    let candidate = symmetric_dogleg(start, end);
    if path_clear(&candidate) {
        return Some(Route::from_points(candidate));
    }

    trace!(%start, %end, "direct hop blocked");
    None
}

/// Three-segment path that runs half way along the dominant axis, crosses over, and
/// finishes on the other half. Ties go to the x-first variant.
fn symmetric_dogleg(start: Point, end: Point) -> [Point; 4] {
    let offset_x = (start.x - end.x).abs();
    let offset_y = (start.y - end.y).abs();
    if offset_x >= offset_y {
        let mid_x = (start.x + end.x) / 2.0;
        [start, Point::new(mid_x, start.y), Point::new(mid_x, end.y), end]
    } else {
        let mid_y = (start.y + end.y) / 2.0;
        [start, Point::new(start.x, mid_y), Point::new(end.x, mid_y), end]
    }
}
