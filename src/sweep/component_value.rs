// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The component-value sweep descriptor: a single primitive's value swept
//! linearly or logarithmically at a fixed frequency.

use crate::components::ComponentKind;

use super::error::SweepError;
use super::frequency::SweepDistribution;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSweep {
    component_kind: ComponentKind,
    value_start: f64,
    value_stop: f64,
    num_points: usize,
    fixed_frequency_hz: f64,
    distribution: SweepDistribution,
}

impl ComponentSweep {
    pub fn new(
        component_kind: ComponentKind,
        value_start: f64,
        value_stop: f64,
        num_points: usize,
        fixed_frequency_hz: f64,
        distribution: SweepDistribution,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::InvalidSweep(format!(
                "num_points must be >= 2, got {num_points}"
            )));
        }
        if distribution == SweepDistribution::Log && value_start <= 0.0 {
            return Err(SweepError::InvalidSweep(
                "log-distributed component sweep requires a positive value_start".into(),
            ));
        }
        if value_start == value_stop && num_points > 1 {
            return Err(SweepError::InvalidSweep(
                "value_start == value_stop with more than one point".into(),
            ));
        }
        if fixed_frequency_hz <= 0.0 {
            return Err(SweepError::InvalidSweep(format!(
                "fixed_frequency_hz must be positive, got {fixed_frequency_hz}"
            )));
        }
        Ok(Self {
            component_kind,
            value_start,
            value_stop,
            num_points,
            fixed_frequency_hz,
            distribution,
        })
    }

    pub fn component_kind(&self) -> ComponentKind {
        self.component_kind
    }

    pub fn fixed_frequency_hz(&self) -> f64 {
        self.fixed_frequency_hz
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The `num_points` sample values, in sweep order.
    pub fn values(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut out = Vec::with_capacity(n);
        match self.distribution {
            SweepDistribution::Linear => {
                let step = (self.value_stop - self.value_start) / (n - 1) as f64;
                for k in 0..n {
                    out.push(self.value_start + k as f64 * step);
                }
            }
            SweepDistribution::Log => {
                let log_start = self.value_start.log10();
                let log_stop = self.value_stop.log10();
                let step = (log_stop - log_start) / (n - 1) as f64;
                for k in 0..n {
                    out.push(10f64.powf(log_start + k as f64 * step));
                }
            }
        }
        out
    }
}
