//! Sampling grids and parameter-validation helpers shared by the solvers.

use crate::errors::{GeoanaError, Result};
use crate::math::{R3, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop`.
/// Requires start > 0 and stop > 0.
pub fn logspace(start: Scalar, stop: Scalar, n: usize) -> Result<Vec<Scalar>> {
    require_positive("start", start)?;
    require_positive("stop", stop)?;
    Ok(match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let log_stop = stop.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    })
}

/// Tensor-product evaluation grid over the three coordinate axes.
///
/// Ordering is x-fastest: the point index is `ix + nx * (iy + ny * iz)`.
#[must_use]
pub fn ndgrid(xs: &[Scalar], ys: &[Scalar], zs: &[Scalar]) -> Vec<R3> {
    let mut points = Vec::with_capacity(xs.len() * ys.len() * zs.len());
    for &z in zs {
        for &y in ys {
            for &x in xs {
                points.push(R3::new(x, y, z));
            }
        }
    }
    points
}

/// Validates that `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: Scalar) -> Result<Scalar> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(GeoanaError::InvalidParameter {
            name,
            reason: format!("must be > 0, got {value}"),
        });
    }
    Ok(value)
}

/// Validates that `value` is finite.
pub fn require_finite(name: &'static str, value: Scalar) -> Result<Scalar> {
    if !value.is_finite() {
        return Err(GeoanaError::InvalidParameter {
            name,
            reason: format!("must be finite, got {value}"),
        });
    }
    Ok(value)
}

/// Validates that `vector` has nonzero length and returns its unit version.
///
/// Inputs within 1e-8 of the zero vector are rejected rather than normalized
/// into noise.
pub fn require_unit(name: &'static str, vector: R3) -> Result<R3> {
    let norm = vector.norm();
    if !norm.is_finite() || norm < 1.0e-8 {
        return Err(GeoanaError::InvalidParameter {
            name,
            reason: format!("direction must have nonzero length, got |v| = {norm}"),
        });
    }
    Ok(vector / norm)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn logspace_spans_decades() {
        let v = logspace(1.0, 1000.0, 4).unwrap();
        assert_relative_eq!(v[0], 1.0, max_relative = 1.0e-12);
        assert_relative_eq!(v[1], 10.0, max_relative = 1.0e-12);
        assert_relative_eq!(v[3], 1000.0, max_relative = 1.0e-12);
        assert!(logspace(0.0, 10.0, 3).is_err());
    }

    #[test]
    fn ndgrid_is_x_fastest() {
        let pts = ndgrid(&[0.0, 1.0], &[10.0, 20.0], &[5.0]);
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], R3::new(0.0, 10.0, 5.0));
        assert_eq!(pts[1], R3::new(1.0, 10.0, 5.0));
        assert_eq!(pts[2], R3::new(0.0, 20.0, 5.0));
    }

    #[test]
    fn unit_guard_normalizes_and_rejects_zero() {
        let u = require_unit("orientation", R3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(u.norm(), 1.0, epsilon = 1.0e-12);
        assert!(require_unit("orientation", R3::zeros()).is_err());
    }
}
