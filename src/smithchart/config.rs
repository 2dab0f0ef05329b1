// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The point-spacing configuration driving the adaptive refinement policy.

/// `(s_min, s_max, e_th, e_boost)` plus the `adaptive` toggle. Spacing is
/// interpolated between `s_max` at the center of the disk and `s_min` at
/// `edge_threshold`, then shrinks hyperbolically toward the unit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmithChartConfig {
    pub min_spacing: f64,
    pub max_spacing: f64,
    pub edge_threshold: f64,
    pub edge_boost: f64,
    pub adaptive: bool,
}

impl SmithChartConfig {
    pub fn new(min_spacing: f64, max_spacing: f64, edge_threshold: f64, edge_boost: f64) -> Self {
        Self { min_spacing, max_spacing, edge_threshold, edge_boost, adaptive: true }
    }

    /// A config with `adaptive = false`: refinement is skipped and exactly
    /// one point is emitted per input sample.
    pub fn non_adaptive(mut self) -> Self {
        self.adaptive = false;
        self
    }

    /// The target point spacing at radius `r = |Γ|` from this config.
    pub fn spacing_at(&self, r: f64) -> f64 {
        if r < self.edge_threshold {
            self.max_spacing - (r / self.edge_threshold) * (self.max_spacing - self.min_spacing)
        } else {
            let u = (r - self.edge_threshold) / (1.0 - self.edge_threshold);
            self.min_spacing / (1.0 + self.edge_boost * u)
        }
    }
}

impl Default for SmithChartConfig {
    /// A reasonable general-purpose default: 0.001 to 0.01 spacing, edge
    /// threshold at 0.8 of the unit radius, 4x edge density boost.
    fn default() -> Self {
        Self::new(0.001, 0.01, 0.8, 4.0)
    }
}
