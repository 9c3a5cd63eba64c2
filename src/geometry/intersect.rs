// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Point;

/// Returns whether segment `ab` intersects or overlaps segment `cd`.
///
/// All interval tests are closed, so touching endpoints and collinear overlap both count.
/// The predicate is symmetric in the two segments and in the orientation of each segment.
///
/// No division is performed: every comparison is cross-multiplied against a denominator
/// that is known to be non-zero in its branch, which keeps the result exact whenever the
/// products themselves are exact (e.g. grid-aligned inputs).
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let ab_vertical = a.x == b.x;
    let cd_vertical = c.x == d.x;

    match (ab_vertical, cd_vertical) {
        (true, true) => a.x == c.x && closed_overlap(a.y, b.y, c.y, d.y),
        (true, false) => vertical_meets(a, b, c, d),
        (false, true) => vertical_meets(c, d, a, b),
        (false, false) => sloped_meet(a, b, c, d),
    }
}

fn span(u: f64, v: f64) -> (f64, f64) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

fn within(value: f64, u: f64, v: f64) -> bool {
    let (lo, hi) = span(u, v);
    lo <= value && value <= hi
}

fn closed_overlap(p0: f64, p1: f64, q0: f64, q1: f64) -> bool {
    let (p_lo, p_hi) = span(p0, p1);
    let (q_lo, q_hi) = span(q0, q1);
    p_lo <= q_hi && q_lo <= p_hi
}

/// `v0v1` is vertical, `s0s1` is not.
fn vertical_meets(v0: Point, v1: Point, s0: Point, s1: Point) -> bool {
    let x = v0.x;
    if !within(x, s0.x, s1.x) {
        return false;
    }

    // Orient the sloped segment left to right so `dx > 0`, then compare
    // `y(x) * dx = s0.y * dx + (x - s0.x) * dy` against the scaled vertical span.
    let (s0, s1) = if s0.x < s1.x { (s0, s1) } else { (s1, s0) };
    let dx = s1.x - s0.x;
    let dy = s1.y - s0.y;
    let y_scaled = s0.y * dx + (x - s0.x) * dy;

    let (lo, hi) = span(v0.y, v1.y);
    lo * dx <= y_scaled && y_scaled <= hi * dx
}

/// Neither segment is vertical.
fn sloped_meet(a: Point, b: Point, c: Point, d: Point) -> bool {
    let ab = b - a;
    let cd = d - c;

    // Slopes `ab.y / ab.x` and `cd.y / cd.x`, cross-multiplied.
    let denom = ab.cross(cd);
    let ac = c - a;
    if denom == 0.0 {
        // Parallel lines share their y-intercept iff `c` lies on the line through `ab`.
        if ac.cross(ab) != 0.0 {
            return false;
        }
        return closed_overlap(a.x, b.x, c.x, d.x);
    }

    // Unique crossing point `a + ab * t == c + cd * u`. The point lies inside both closed
    // bounding boxes exactly when `t` and `u` lie in `[0, 1]`.
    let t_num = ac.cross(cd);
    let u_num = ac.cross(ab);
    unit_fraction(t_num, denom) && unit_fraction(u_num, denom)
}

/// `num / denom` in `[0, 1]` for `denom != 0`, without dividing.
fn unit_fraction(num: f64, denom: f64) -> bool {
    if denom > 0.0 {
        0.0 <= num && num <= denom
    } else {
        denom <= num && num <= 0.0
    }
}
