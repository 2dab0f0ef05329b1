// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frequency sweep descriptor: `(start_hz, stop_hz, num_points,
//! distribution)`, lazily enumerable into a vector of sample frequencies.

use super::error::SweepError;

/// Linear or logarithmic spacing of sweep samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepDistribution {
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencySweep {
    start_hz: f64,
    stop_hz: f64,
    num_points: usize,
    distribution: SweepDistribution,
}

impl FrequencySweep {
    pub fn new(
        start_hz: f64,
        stop_hz: f64,
        num_points: usize,
        distribution: SweepDistribution,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::InvalidSweep(format!(
                "num_points must be >= 2, got {num_points}"
            )));
        }
        if start_hz <= 0.0 {
            return Err(SweepError::InvalidSweep(format!(
                "start_hz must be positive, got {start_hz}"
            )));
        }
        if distribution == SweepDistribution::Log && (start_hz <= 0.0 || stop_hz <= 0.0) {
            return Err(SweepError::InvalidSweep(
                "log-distributed sweep requires a positive start_hz and stop_hz".into(),
            ));
        }
        if start_hz == stop_hz && num_points > 1 {
            return Err(SweepError::InvalidSweep(
                "start_hz == stop_hz with more than one point".into(),
            ));
        }
        Ok(Self { start_hz, stop_hz, num_points, distribution })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn start_hz(&self) -> f64 {
        self.start_hz
    }

    pub fn stop_hz(&self) -> f64 {
        self.stop_hz
    }

    /// The `num_points` sample frequencies, in sweep order.
    pub fn values(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut out = Vec::with_capacity(n);
        match self.distribution {
            SweepDistribution::Linear => {
                let step = (self.stop_hz - self.start_hz) / (n - 1) as f64;
                for k in 0..n {
                    out.push(self.start_hz + k as f64 * step);
                }
            }
            SweepDistribution::Log => {
                let log_start = self.start_hz.log10();
                let log_stop = self.stop_hz.log10();
                let step = (log_stop - log_start) / (n - 1) as f64;
                for k in 0..n {
                    out.push(10f64.powf(log_start + k as f64 * step));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sweep_rejects_nonpositive_stop_hz() {
        assert!(FrequencySweep::new(1e6, 0.0, 10, SweepDistribution::Log).is_err());
        assert!(FrequencySweep::new(1e6, -1e9, 10, SweepDistribution::Log).is_err());
    }

    #[test]
    fn log_sweep_accepts_positive_bounds() {
        let sweep = FrequencySweep::new(1e6, 1e9, 4, SweepDistribution::Log).unwrap();
        let values = sweep.values();
        assert_eq!(values.len(), 4);
        assert!(values[0] > 0.0 && values[3] > 0.0);
    }
}
