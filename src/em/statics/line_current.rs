use std::f64::consts::PI;

use crate::em::base::Medium;
use crate::errors::{GeoanaError, Result};
use crate::math::{R3, Scalar};
use crate::utils::require_finite;

/// Straight wire segment between two endpoints.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireSegment {
    /// Segment start in meters.
    pub start: R3,
    /// Segment end in meters.
    pub end: R3,
}

/// Perpendicular distance below which a segment contribution is skipped.
const WIRE_GUARD: Scalar = 1.0e-12;

/// Magnetic flux density of a finite straight segment carrying `current`,
/// from the closed-form Biot-Savart integral
/// B = μI/(4πd) (cosθ₁ - cosθ₂) φ̂.
///
/// Receivers on the (extended) wire axis get a zero contribution.
#[must_use]
pub fn magnetic_flux_density_segment(
    permeability: Scalar,
    current: Scalar,
    segment: &WireSegment,
    xyz: &R3,
) -> R3 {
    let l = segment.end - segment.start;
    let len = l.norm();
    if len <= WIRE_GUARD {
        return R3::zeros();
    }
    let l_hat = l / len;
    let r1 = xyz - segment.start;
    let r2 = xyz - segment.end;
    let perp = l_hat.cross(&r1);
    let d2 = perp.norm_squared();
    if d2 <= WIRE_GUARD * WIRE_GUARD {
        return R3::zeros();
    }
    let cos1 = l_hat.dot(&r1) / r1.norm();
    let cos2 = l_hat.dot(&r2) / r2.norm();
    perp * (permeability * current / (4.0 * PI * d2) * (cos1 - cos2))
}

/// Vector potential of a finite straight segment,
/// A = μI/(4π) ln[(r₁ + l̂·r₁)/(r₂ + l̂·r₂)] l̂.
#[must_use]
pub fn vector_potential_segment(
    permeability: Scalar,
    current: Scalar,
    segment: &WireSegment,
    xyz: &R3,
) -> R3 {
    let l = segment.end - segment.start;
    let len = l.norm();
    if len <= WIRE_GUARD {
        return R3::zeros();
    }
    let l_hat = l / len;
    let r1 = xyz - segment.start;
    let r2 = xyz - segment.end;
    let d2 = l_hat.cross(&r1).norm_squared();
    if d2 <= WIRE_GUARD * WIRE_GUARD {
        return R3::zeros();
    }
    let num = r1.norm() + l_hat.dot(&r1);
    let den = r2.norm() + l_hat.dot(&r2);
    l_hat * (permeability * current / (4.0 * PI) * (num / den).ln())
}

/// Piecewise-linear current path in an unbounded homogeneous medium.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct LineCurrentWholeSpace {
    /// Background medium (only μ enters).
    pub medium: Medium,
    /// Wire vertices, traversed in order by the current.
    pub nodes: Vec<R3>,
    /// Current I in amperes.
    pub current: Scalar,
}

impl LineCurrentWholeSpace {
    /// Creates a wire path with at least one segment of nonzero length.
    pub fn new(medium: Medium, nodes: Vec<R3>, current: Scalar) -> Result<Self> {
        require_finite("current", current)?;
        if nodes.len() < 2 {
            return Err(GeoanaError::InvalidParameter {
                name: "nodes",
                reason: format!("a wire needs at least 2 vertices, got {}", nodes.len()),
            });
        }
        for pair in nodes.windows(2) {
            if (pair[1] - pair[0]).norm() <= WIRE_GUARD {
                return Err(GeoanaError::InvalidParameter {
                    name: "nodes",
                    reason: "wire contains a zero-length segment".into(),
                });
            }
        }
        Ok(Self {
            medium,
            nodes,
            current,
        })
    }

    /// Convenience constructor for a wire in free space.
    pub fn free_space(nodes: Vec<R3>, current: Scalar) -> Result<Self> {
        Self::new(Medium::vacuum(), nodes, current)
    }

    fn segments(&self) -> impl Iterator<Item = WireSegment> + '_ {
        self.nodes.windows(2).map(|pair| WireSegment {
            start: pair[0],
            end: pair[1],
        })
    }

    /// Magnetic flux density summed over all segments.
    #[must_use]
    pub fn magnetic_flux_density(&self, xyz: &R3) -> R3 {
        self.segments()
            .map(|s| magnetic_flux_density_segment(self.medium.permeability, self.current, &s, xyz))
            .sum()
    }

    /// Magnetic field H = B/μ.
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> R3 {
        self.magnetic_flux_density(xyz) / self.medium.permeability
    }

    /// Vector potential summed over all segments.
    #[must_use]
    pub fn vector_potential(&self, xyz: &R3) -> R3 {
        self.segments()
            .map(|s| vector_potential_segment(self.medium.permeability, self.current, &s, xyz))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::VACUUM_PERMEABILITY;

    #[test]
    fn long_straight_wire_approaches_infinite_wire_field() {
        let wire = LineCurrentWholeSpace::free_space(
            vec![R3::new(0.0, 0.0, -5.0e3), R3::new(0.0, 0.0, 5.0e3)],
            2.0,
        )
        .unwrap();
        let d = 0.25;
        let b = wire.magnetic_flux_density(&R3::new(d, 0.0, 0.0));
        let expected = VACUUM_PERMEABILITY * 2.0 / (2.0 * PI * d);
        assert_relative_eq!(b.y, expected, max_relative = 1.0e-8);
        assert_relative_eq!(b.x, 0.0, epsilon = 1.0e-18);
        assert_relative_eq!(b.z, 0.0, epsilon = 1.0e-18);
    }

    #[test]
    fn square_loop_center_field_matches_closed_form() {
        // side L = 2, B = 2 sqrt(2) mu0 I / (pi L)
        let i = 1.5;
        let wire = LineCurrentWholeSpace::free_space(
            vec![
                R3::new(-1.0, -1.0, 0.0),
                R3::new(1.0, -1.0, 0.0),
                R3::new(1.0, 1.0, 0.0),
                R3::new(-1.0, 1.0, 0.0),
                R3::new(-1.0, -1.0, 0.0),
            ],
            i,
        )
        .unwrap();
        let b = wire.magnetic_flux_density(&R3::zeros());
        let expected = 2.0 * 2.0_f64.sqrt() * VACUUM_PERMEABILITY * i / (PI * 2.0);
        assert_relative_eq!(b.z, expected, max_relative = 1.0e-12);
    }

    #[test]
    fn vector_potential_curl_matches_flux_density() {
        let wire = LineCurrentWholeSpace::free_space(
            vec![R3::new(-1.0, 0.0, 0.0), R3::new(1.0, 0.0, 0.0)],
            1.0,
        )
        .unwrap();
        let p = R3::new(0.3, 0.9, -0.5);
        let h = 1.0e-5;
        let dx = R3::new(h, 0.0, 0.0);
        let dy = R3::new(0.0, h, 0.0);
        let dz = R3::new(0.0, 0.0, h);
        let da_dx = (wire.vector_potential(&(p + dx)) - wire.vector_potential(&(p - dx))) / (2.0 * h);
        let da_dy = (wire.vector_potential(&(p + dy)) - wire.vector_potential(&(p - dy))) / (2.0 * h);
        let da_dz = (wire.vector_potential(&(p + dz)) - wire.vector_potential(&(p - dz))) / (2.0 * h);
        let curl = R3::new(da_dy.z - da_dz.y, da_dz.x - da_dx.z, da_dx.y - da_dy.x);
        let b = wire.magnetic_flux_density(&p);
        assert_relative_eq!((curl - b).norm(), 0.0, epsilon = 1.0e-6 * b.norm());
    }

    #[test]
    fn degenerate_paths_are_rejected() {
        assert!(LineCurrentWholeSpace::free_space(vec![R3::zeros()], 1.0).is_err());
        assert!(
            LineCurrentWholeSpace::free_space(vec![R3::zeros(), R3::zeros()], 1.0).is_err()
        );
    }
}
