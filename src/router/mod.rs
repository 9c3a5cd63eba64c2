// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Routing strategies, from cheapest to most thorough.
//!
//! - [`direct`]: straight, elbow and symmetric dogleg candidates.
//! - [`grid`]: A* over a lattice anchored at the hop start.
//! - [`compose`](mod@compose): per-hop driver that tries the two in that order.

pub mod compose;
pub mod direct;
pub mod grid;

pub use compose::{compose, Endpoint, Router};
pub use direct::try_direct;
pub use grid::{search, GOAL_TOLERANCE};
