// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Anchorroute: orthogonal trace routing between component connection points.
//!
//! A route leaves its start endpoint along the endpoint's normal, visits the waypoints in
//! order, and enters the end endpoint against its normal. Each hop is first attempted as a
//! straight, elbow or dogleg path and falls back to an A* grid search around the axis-aligned
//! obstacle rectangles.
//!
//! ```
//! use anchorroute::{compose, Endpoint, Obstacles, Point, Rect, RouterConfig, Vector};
//!
//! let obstacles = Obstacles::new(vec![Rect::new(2.0, -1.0, 4.0, 1.0)]);
//! let start = Endpoint::new(Point::new(0.0, 0.0), Vector::RIGHT);
//! let end = Endpoint::new(Point::new(6.0, 0.0), Vector::LEFT);
//! let config = RouterConfig::default()
//!     .with_step_size(0.5)
//!     .with_leads(0.5, 0.5)
//!     .with_trace_width(0.0);
//!
//! let route = compose(&obstacles, &start, &[], &end, &config)?;
//! assert_eq!(route.last(), Some(Point::new(6.0, 0.0)));
//! # Ok::<(), anchorroute::RouteError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod obstacles;
pub mod request;
pub mod route;
pub mod router;

pub use config::RouterConfig;
pub use error::{ConfigError, RouteError, SearchError};
pub use geometry::{segments_intersect, Point, Rect, Segment, Vector};
pub use obstacles::{ObstacleIndex, Obstacles};
pub use request::{RequestDocument, RequestError, RouteRequest, RouteResponse};
pub use route::Route;
pub use router::{compose, Endpoint, Router};
