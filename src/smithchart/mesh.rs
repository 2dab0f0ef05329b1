// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The 2-D mesh mode: a builder `N(f, v)` evaluated over the outer product
//! of a frequency sweep and a component-value sweep, emitting a regular
//! grid of reflection coefficients plus a triangulation of the grid cells
//! for downstream rendering.

use crate::complex::C;
use crate::error::RfError;
use crate::sweep::{ComponentSweep, FrequencySweep};
use crate::twoport::TwoPort;

use super::error::SmithChartError;
use super::impedance_to_reflection;

/// The regular `R x C` grid produced by [`mesh`]: `R` rows index the
/// frequency axis, `C` columns index the component-value axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmithChartMesh {
    pub rows: usize,
    pub cols: usize,
    /// `gamma[2k..2k+1]` is the reflection coefficient at grid index `k`,
    /// row-major (`k = row * cols + col`), clamped to `[-1, 1]` coordinatewise.
    pub gamma: Vec<f64>,
    /// The component value that produced each grid point, row-major.
    pub value: Vec<f64>,
    /// `2 * (rows-1) * (cols-1)` triangle index triples, two per grid cell:
    /// `(i00, i01, i10)` and `(i01, i11, i10)`.
    pub triangles: Vec<[usize; 3]>,
}

/// Evaluate `builder(f, v)` over the outer product of `frequency_sweep`'s
/// `R` samples and `component_sweep`'s `C` samples, mapping each resulting
/// `Z_in` (under `z_load`) through the bilinear transform at `z0`, and
/// triangulating the resulting grid with consistent winding.
///
/// Propagates the first error `builder` raises, together with the flattened
/// grid index at which it occurred, and abandons the remainder of the mesh.
pub fn mesh(
    builder: impl Fn(f64, f64) -> Result<TwoPort, RfError>,
    frequency_sweep: &FrequencySweep,
    component_sweep: &ComponentSweep,
    z0: f64,
    z_load: C,
) -> Result<SmithChartMesh, SmithChartError> {
    let freqs = frequency_sweep.values();
    let values = component_sweep.values();
    let rows = freqs.len();
    let cols = values.len();

    let mut gamma = Vec::with_capacity(rows * cols * 2);
    let mut value = Vec::with_capacity(rows * cols);

    for (row, f) in freqs.iter().enumerate() {
        for (col, v) in values.iter().enumerate() {
            let index = row * cols + col;
            let network = builder(*f, *v).map_err(|source| SmithChartError::BuilderFailed {
                index,
                source: Box::new(source),
            })?;
            let z_in = network.input_impedance(z_load).map_err(|e| {
                SmithChartError::BuilderFailed { index, source: Box::new(RfError::from(e)) }
            })?;
            let g = impedance_to_reflection(z_in, z0)?;
            gamma.push(g.re.clamp(-1.0, 1.0));
            gamma.push(g.im.clamp(-1.0, 1.0));
            value.push(*v);
        }
    }

    let triangles = triangulate(rows, cols);

    Ok(SmithChartMesh { rows, cols, gamma, value, triangles })
}

/// Two triangles per grid cell with consistent winding:
/// `(i00, i01, i10)` and `(i01, i11, i10)`.
fn triangulate(rows: usize, cols: usize) -> Vec<[usize; 3]> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2 * (rows - 1) * (cols - 1));
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            let i00 = row * cols + col;
            let i01 = row * cols + col + 1;
            let i10 = (row + 1) * cols + col;
            let i11 = (row + 1) * cols + col + 1;
            out.push([i00, i01, i10]);
            out.push([i01, i11, i10]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangulation_counts_and_winding() {
        let tris = triangulate(3, 4);
        assert_eq!(tris.len(), 2 * 2 * 3);
        assert_eq!(tris[0], [0, 1, 4]);
        assert_eq!(tris[1], [1, 5, 4]);
    }

    #[test]
    fn degenerate_single_row_or_column_has_no_triangles() {
        assert!(triangulate(1, 5).is_empty());
        assert!(triangulate(5, 1).is_empty());
    }
}
