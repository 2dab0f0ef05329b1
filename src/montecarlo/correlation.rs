// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Correlated sampling: a Cholesky factor of the caller's correlation
//! matrix, applied to a vector of independent standard normals before each
//! component's tolerance scaling is applied.
//!
//! The source this crate descends from left this path unimplemented ("TODO"
//! in the correlation code) and fell back to independent sampling. Here the
//! factorization is carried out; callers that pass `None` still get
//! independent samples, matching the documented fallback.

use ndarray::Array2;

use super::error::MonteCarloError;

/// Lower-triangular Cholesky factor `L` such that `L · Lᵀ = matrix`.
///
/// `matrix` must be square and symmetric positive semi-definite. Returns
/// [`MonteCarloError::InvalidCorrelation`] if it is not square, not
/// symmetric within `1e-9`, or the factorization encounters a negative
/// pivot (not positive semi-definite).
pub fn cholesky(matrix: &Array2<f64>) -> Result<Array2<f64>, MonteCarloError> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(MonteCarloError::InvalidCorrelation(format!(
            "correlation matrix must be square, got {}x{}",
            n,
            matrix.ncols()
        )));
    }
    for i in 0..n {
        for j in 0..n {
            if (matrix[[i, j]] - matrix[[j, i]]).abs() > 1e-9 {
                return Err(MonteCarloError::InvalidCorrelation(
                    "correlation matrix is not symmetric".into(),
                ));
            }
        }
    }

    let mut l = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = matrix[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            if i == j {
                if sum < -1e-9 {
                    return Err(MonteCarloError::InvalidCorrelation(
                        "correlation matrix is not positive semi-definite".into(),
                    ));
                }
                l[[i, j]] = sum.max(0.0).sqrt();
            } else if l[[j, j]].abs() < 1e-20 {
                l[[i, j]] = 0.0;
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }
    Ok(l)
}

/// Apply the Cholesky factor to a vector of independent standard normals,
/// producing correlated standard normals: `y = L · x`.
pub fn apply_cholesky(chol: &Array2<f64>, standard_normals: &[f64]) -> Vec<f64> {
    let n = chol.nrows();
    let mut out = vec![0.0; n];
    for i in 0..n {
        let mut acc = 0.0;
        for j in 0..=i {
            acc += chol[[i, j]] * standard_normals[j];
        }
        out[i] = acc;
    }
    out
}
