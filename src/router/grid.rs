// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fallback A* search over an implicit 4-connected lattice.
//!
//! The lattice is anchored at the hop's start point: cell `(i, j)` sits at
//! `start + (i * step, j * step)`. Cells are integers, so visited-set keys are exact and
//! coordinates never drift from repeated float additions.
//!
//! Frontier entries are ordered by `(f, x, y)` with `f = g + h`, `g` the travelled length
//! and `h` the Manhattan distance to the goal. Ties resolve on the lower x, then the
//! lower y, which makes the search fully deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::geometry::{Point, Segment, Vector};
use crate::obstacles::ObstacleIndex;
use crate::route::Route;

/// A neighbor whose Manhattan distance to the goal is below this counts as the goal.
pub const GOAL_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Cell {
    i: i64,
    j: i64,
}

impl Cell {
    const ORIGIN: Cell = Cell { i: 0, j: 0 };

    fn offset(self, step: Step) -> Self {
        let (di, dj) = step.delta();
        Self { i: self.i + di, j: self.j + dj }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
    Right,
    Left,
}

impl Step {
    const ALL: [Step; 4] = [Step::Up, Step::Down, Step::Right, Step::Left];

    fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
        }
    }

    fn vector(self) -> Vector {
        match self {
            Self::Up => Vector::UP,
            Self::Down => Vector::DOWN,
            Self::Right => Vector::RIGHT,
            Self::Left => Vector::LEFT,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Lattice {
    origin: Point,
    step: f64,
}

impl Lattice {
    fn point(&self, cell: Cell) -> Point {
        Point::new(
            self.origin.x + cell.i as f64 * self.step,
            self.origin.y + cell.j as f64 * self.step,
        )
    }
}

type NodeId = usize;

/// Arena entry. A node's path is its parent chain back to the root.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    cell: Cell,
    steps: u64,
    parent: Option<NodeId>,
    heading: Option<Step>,
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    x: f64,
    y: f64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.x.total_cmp(&other.x))
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Grid search from `start` to `end`.
///
/// The first move may not oppose `start_direction`, and no later move may reverse the
/// previous one. Runs of equal heading are merged into single segments and the final
/// vertex is snapped to exactly `end`.
///
/// `max_expansions` bounds the number of frontier pops.
pub fn search<I>(
    obstacles: &I,
    start_direction: Vector,
    start: Point,
    end: Point,
    step_size: f64,
    max_expansions: usize,
) -> Result<Route, SearchError>
where
    I: ObstacleIndex + ?Sized,
{
    if start.manhattan(end) < GOAL_TOLERANCE {
        return Ok(Route::from_points([start, end]));
    }

    let lattice = Lattice { origin: start, step: step_size };
    let mut arena = vec![SearchNode { cell: Cell::ORIGIN, steps: 0, parent: None, heading: None }];
    let mut visited = HashSet::from([Cell::ORIGIN]);
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        f: start.manhattan(end),
        x: start.x,
        y: start.y,
        node: 0,
    }));

    let mut expansions = 0usize;
    while let Some(Reverse(entry)) = frontier.pop() {
        expansions += 1;
        if expansions > max_expansions {
            debug!(%start, %end, limit = max_expansions, "grid search budget exceeded");
            return Err(SearchError::BudgetExceeded { limit: max_expansions });
        }

        let node = arena[entry.node];
        let here = lattice.point(node.cell);
        let direction = node.heading.map(Step::vector).unwrap_or(start_direction);

        let mut neighbors = SmallVec::<[(Step, Cell, Point); 4]>::new();
        for step in Step::ALL {
            if step.vector().dot(direction) < 0.0 {
                continue;
            }
            let cell = node.cell.offset(step);
            let point = lattice.point(cell);
            if !obstacles.is_clear(&Segment::new(here, point)) {
                trace!(from = %here, to = %point, "grid step blocked");
                continue;
            }
            neighbors.push((step, cell, point));
        }

        for (step, cell, point) in neighbors {
            if visited.contains(&cell) {
                continue;
            }

            let child = SearchNode {
                cell,
                steps: node.steps + 1,
                parent: Some(entry.node),
                heading: Some(step),
            };
            let child_id = arena.len();
            arena.push(child);

            let remaining = point.manhattan(end);
            if remaining < GOAL_TOLERANCE {
                debug!(%start, %end, expansions, nodes = arena.len(), "grid search reached goal");
                return finish(obstacles, &arena, child_id, lattice, end);
            }

            let f = child.steps as f64 * step_size + remaining;
            frontier.push(Reverse(FrontierEntry { f, x: point.x, y: point.y, node: child_id }));
            visited.insert(cell);
        }
    }

    debug!(%start, %end, expansions, "grid search frontier exhausted");
    Err(SearchError::Exhausted { expansions })
}

/// Rebuilds the path to `goal_node`, merging runs of equal heading, snapping the last
/// vertex to `end`, and re-checking every resulting segment.
fn finish<I>(
    obstacles: &I,
    arena: &[SearchNode],
    goal_node: NodeId,
    lattice: Lattice,
    end: Point,
) -> Result<Route, SearchError>
where
    I: ObstacleIndex + ?Sized,
{
    let mut chain = Vec::<SearchNode>::new();
    let mut cursor = Some(goal_node);
    while let Some(id) = cursor {
        let node = arena[id];
        chain.push(node);
        cursor = node.parent;
    }
    chain.reverse();

    let mut vertices = Vec::<Cell>::with_capacity(chain.len());
    let mut prev_heading = None;
    for node in &chain {
        match (node.heading, prev_heading) {
            (Some(heading), Some(prev)) if heading == prev => {
                if let Some(tail) = vertices.last_mut() {
                    *tail = node.cell;
                }
            }
            _ => vertices.push(node.cell),
        }
        prev_heading = node.heading;
    }

    let mut points = vertices.into_iter().map(|cell| lattice.point(cell)).collect::<Vec<_>>();
    if let Some(last) = points.last_mut() {
        *last = end;
    }

    for pair in points.windows(2) {
        if !obstacles.is_clear(&Segment::new(pair[0], pair[1])) {
            return Err(SearchError::ClearanceViolation { from: pair[0], to: pair[1] });
        }
    }

    Ok(Route::from_points(points))
}
