// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Anchorroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Anchorroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Router settings.
//!
//! Lengths share the unit of the obstacle coordinates; the defaults assume millimetres.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

mod defaults {
    pub fn step_size() -> f64 {
        0.25
    }

    pub fn lead_length() -> f64 {
        0.022
    }

    pub fn trace_width() -> f64 {
        0.01
    }

    pub fn max_expansions() -> usize {
        100_000
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouterConfig {
    /// Grid resolution of the fallback search.
    #[serde(default = "defaults::step_size")]
    pub step_size: f64,

    /// Straight extension past the start endpoint along its normal.
    #[serde(default = "defaults::lead_length")]
    pub lead_in: f64,

    /// Straight extension past the end endpoint along its normal.
    #[serde(default = "defaults::lead_length")]
    pub lead_out: f64,

    /// Trace width; half of it is added to both lead lengths so the lead clears the pin.
    #[serde(default = "defaults::trace_width")]
    pub trace_width: f64,

    /// Maximum number of frontier pops per grid search hop.
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            step_size: defaults::step_size(),
            lead_in: defaults::lead_length(),
            lead_out: defaults::lead_length(),
            trace_width: defaults::trace_width(),
            max_expansions: defaults::max_expansions(),
        }
    }
}

impl RouterConfig {
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_leads(mut self, lead_in: f64, lead_out: f64) -> Self {
        self.lead_in = lead_in;
        self.lead_out = lead_out;
        self
    }

    pub fn with_trace_width(mut self, trace_width: f64) -> Self {
        self.trace_width = trace_width;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Distance from an endpoint to its lead point.
    pub fn lead_in_offset(&self) -> f64 {
        self.trace_width / 2.0 + self.lead_in
    }

    pub fn lead_out_offset(&self) -> f64 {
        self.trace_width / 2.0 + self.lead_out
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigError::NonPositiveStepSize { value: self.step_size });
        }
        for (field, value) in
            [("lead_in", self.lead_in), ("lead_out", self.lead_out), ("trace_width", self.trace_width)]
        {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeLength { field, value });
            }
        }
        if self.max_expansions == 0 {
            return Err(ConfigError::ZeroExpansionBudget);
        }
        Ok(())
    }
}
