// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic board fixtures (no RNG).

use anchorroute::{Endpoint, Obstacles, Point, Rect, RouterConfig, Vector};

/// A regular grid of square components separated by routing channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardParams {
    pub cols: usize,
    pub rows: usize,
    pub pitch: f64,
    pub size: f64,
}

impl BoardParams {
    pub const fn new(cols: usize, rows: usize, pitch: f64, size: f64) -> Self {
        Self { cols, rows, pitch, size }
    }

    fn origin(&self, col: usize, row: usize) -> Point {
        Point::new(col as f64 * self.pitch, row as f64 * self.pitch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn params(self) -> BoardParams {
        match self {
            Self::Small => BoardParams::new(4, 4, 4.0, 2.0),
            Self::Medium => BoardParams::new(12, 12, 4.0, 2.0),
            Self::Large => BoardParams::new(24, 24, 4.0, 2.0),
        }
    }
}

pub struct Board {
    pub obstacles: Obstacles,
    pub start: Endpoint,
    pub end: Endpoint,
    pub waypoints: Vec<Point>,
}

/// Connects the right pin of the bottom-left component to the left pin of the top-right
/// one, with one waypoint in the middle channel.
///
/// Pins sit at half-height of their component and the lead length equals the grid step,
/// so every hop target lies on its hop's lattice.
pub fn board(params: BoardParams) -> Board {
    assert!(params.cols >= 2 && params.rows >= 2, "board needs at least 2x2 components");
    assert!(params.size < params.pitch, "components must leave a channel");

    let mut rects = Vec::with_capacity(params.cols * params.rows);
    for row in 0..params.rows {
        for col in 0..params.cols {
            let min = params.origin(col, row);
            rects.push(Rect::new(min.x, min.y, min.x + params.size, min.y + params.size));
        }
    }

    let half = params.size / 2.0;
    let first = params.origin(0, 0);
    let last = params.origin(params.cols - 1, params.rows - 1);
    let channel = params.size + (params.pitch - params.size) / 2.0;
    let mid = params.origin(params.cols / 2, params.rows / 2);

    Board {
        obstacles: rects.into_iter().collect(),
        start: Endpoint::new(Point::new(first.x + params.size, first.y + half), Vector::RIGHT),
        end: Endpoint::new(Point::new(last.x, last.y + half), Vector::LEFT),
        waypoints: vec![Point::new(mid.x + channel, mid.y + half)],
    }
}

pub fn fixture(case: Case) -> Board {
    board(case.params())
}

pub fn config() -> RouterConfig {
    RouterConfig::default().with_step_size(0.5).with_leads(0.5, 0.5).with_trace_width(0.0)
}
