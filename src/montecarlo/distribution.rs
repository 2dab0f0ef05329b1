// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-component tolerance distributions and sample generation.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::components::ComponentKind;
use crate::constants::MONTE_CARLO_POSITIVE_FLOOR_FRACTION;

use super::error::MonteCarloError;

/// The shape of a single component's tolerance distribution around its
/// nominal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToleranceKind {
    /// Uniform on `[μ(1-t), μ(1+t)]`.
    Uniform,
    /// Gaussian, `σ = μt/3`, clamped to `[μ(1-t), μ(1+t)]`.
    Gaussian,
    /// Triangular on `[μ(1-t), μ(1+t)]`, peak at `μ`.
    Triangular,
}

/// A single swept component's nominal value, tolerance fraction, and
/// distribution shape, carried through the sample table and statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentTolerance {
    pub kind: ComponentKind,
    pub nominal: f64,
    pub tolerance: f64,
    pub distribution: ToleranceKind,
}

impl ComponentTolerance {
    pub fn new(
        kind: ComponentKind,
        nominal: f64,
        tolerance: f64,
        distribution: ToleranceKind,
    ) -> Result<Self, MonteCarloError> {
        if tolerance < 0.0 {
            return Err(MonteCarloError::InvalidDistribution(format!(
                "tolerance must be non-negative, got {tolerance}"
            )));
        }
        Ok(Self { kind, nominal, tolerance, distribution })
    }

    /// Draw one sample from this component's distribution using `rng`,
    /// clamped strictly positive at `0.01·nominal` for physical kinds (every
    /// [`ComponentKind`] is physical).
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        let raw = sample_raw(self.distribution, self.nominal, self.tolerance, rng);
        if self.kind.is_physical() {
            let floor = MONTE_CARLO_POSITIVE_FLOOR_FRACTION * self.nominal;
            raw.max(floor)
        } else {
            raw
        }
    }
}

fn sample_raw(kind: ToleranceKind, mu: f64, t: f64, rng: &mut impl Rng) -> f64 {
    let lo = mu * (1.0 - t);
    let hi = mu * (1.0 + t);
    match kind {
        ToleranceKind::Uniform => {
            if (hi - lo).abs() < f64::EPSILON {
                mu
            } else {
                rng.gen_range(lo..=hi)
            }
        }
        ToleranceKind::Gaussian => {
            let sigma = mu * t / 3.0;
            let draw = if sigma <= 0.0 {
                mu
            } else {
                Normal::new(mu, sigma).expect("finite mean and non-negative sigma").sample(rng)
            };
            draw.clamp(lo.min(hi), lo.max(hi))
        }
        ToleranceKind::Triangular => {
            let u: f64 = rng.gen();
            if u < 0.5 {
                lo + (2.0 * u).sqrt() * (mu - lo)
            } else {
                hi - (2.0 * (1.0 - u)).sqrt() * (hi - mu)
            }
        }
    }
}
