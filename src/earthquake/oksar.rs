//! Rectangular-dislocation surface deformation in an elastic half-space,
//! after Okada (1985), with InSAR line-of-sight projection helpers.
//!
//! Conventions: map coordinates are (easting, northing, up) in meters,
//! strike is degrees clockwise from north, dip is measured down from
//! horizontal on the right-hand side of the strike direction, and rake is
//! the slip direction in the fault plane (0° = left-lateral strike slip,
//! 90° = reverse/thrust).

use std::f64::consts::PI;

use crate::errors::{GeoanaError, Result};
use crate::math::{R3, Scalar};
use crate::utils::{require_finite, require_positive};

/// Guard for denominators that vanish on the fault's nodal lines.
const EPS: Scalar = 1.0e-12;

/// Finite rectangular fault buried in a uniform elastic half-space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct OkadaFault {
    /// Easting of the fault centroid in meters.
    pub easting: Scalar,
    /// Northing of the fault centroid in meters.
    pub northing: Scalar,
    /// Depth of the fault centroid below the free surface, positive down.
    pub depth: Scalar,
    /// Along-strike length in meters.
    pub length: Scalar,
    /// Down-dip width in meters.
    pub width: Scalar,
    /// Strike in degrees clockwise from north.
    pub strike: Scalar,
    /// Dip in degrees, 0 < dip <= 90.
    pub dip: Scalar,
    /// Rake in degrees.
    pub rake: Scalar,
    /// Slip magnitude in meters.
    pub slip: Scalar,
    /// Tensile opening in meters.
    pub opening: Scalar,
    /// Elastic ratio μ/(λ+μ); 0.5 for a Poisson solid.
    pub alpha: Scalar,
}

impl OkadaFault {
    /// Creates a fault patch, checking that the geometry stays below the
    /// free surface. Uses the Poisson-solid elastic ratio.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        easting: Scalar,
        northing: Scalar,
        depth: Scalar,
        length: Scalar,
        width: Scalar,
        strike: Scalar,
        dip: Scalar,
        rake: Scalar,
        slip: Scalar,
        opening: Scalar,
    ) -> Result<Self> {
        require_positive("depth", depth)?;
        require_positive("length", length)?;
        require_positive("width", width)?;
        require_finite("strike", strike)?;
        require_finite("rake", rake)?;
        require_finite("slip", slip)?;
        require_finite("opening", opening)?;
        if !(0.0..=90.0).contains(&dip) || dip == 0.0 {
            return Err(GeoanaError::InvalidParameter {
                name: "dip",
                reason: format!("must be in (0, 90] degrees, got {dip}"),
            });
        }
        let top_depth = depth - 0.5 * width * dip.to_radians().sin();
        if top_depth < -1.0e-9 {
            return Err(GeoanaError::InvalidParameter {
                name: "depth",
                reason: format!(
                    "fault top edge breaches the surface (top depth {top_depth} m)"
                ),
            });
        }
        Ok(Self {
            easting,
            northing,
            depth,
            length,
            width,
            strike,
            dip,
            rake,
            slip,
            opening,
            alpha: 0.5,
        })
    }

    /// Overrides the elastic ratio μ/(λ+μ).
    pub fn with_alpha(mut self, alpha: Scalar) -> Result<Self> {
        if !(0.0..1.0).contains(&alpha) || alpha == 0.0 {
            return Err(GeoanaError::InvalidParameter {
                name: "alpha",
                reason: format!("must be in (0, 1), got {alpha}"),
            });
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Surface displacement (east, north, up) at a map point; the receiver
    /// z coordinate is ignored (the solution is evaluated on the free
    /// surface).
    #[must_use]
    pub fn displacement(&self, xyz: &R3) -> R3 {
        let phi = self.strike.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let delta = self.dip.to_radians();
        let (sin_d, cos_d) = delta.sin_cos();

        // receiver in the fault frame: x along strike, y to the left of
        // strike, origin above the bottom-left corner of the patch
        let de = xyz.x - self.easting;
        let dn = xyz.y - self.northing;
        let x = de * sin_phi + dn * cos_phi + 0.5 * self.length;
        let y = -de * cos_phi + dn * sin_phi + 0.5 * self.width * cos_d;

        // depth of the bottom edge
        let d = self.depth + 0.5 * self.width * sin_d;
        let p = y * cos_d + d * sin_d;
        let q = y * sin_d - d * cos_d;

        let rake = self.rake.to_radians();
        let u1 = self.slip * rake.cos();
        let u2 = self.slip * rake.sin();
        let u3 = self.opening;

        // Chinnery superposition over the four patch corners
        let mut u = corner(x, p, q, sin_d, cos_d, self.alpha, u1, u2, u3);
        u -= corner(x, p - self.width, q, sin_d, cos_d, self.alpha, u1, u2, u3);
        u -= corner(x - self.length, p, q, sin_d, cos_d, self.alpha, u1, u2, u3);
        u += corner(
            x - self.length,
            p - self.width,
            q,
            sin_d,
            cos_d,
            self.alpha,
            u1,
            u2,
            u3,
        );

        // back to map coordinates
        R3::new(
            u.x * sin_phi - u.y * cos_phi,
            u.x * cos_phi + u.y * sin_phi,
            u.z,
        )
    }

    /// Surface displacement over a set of map points.
    #[must_use]
    pub fn surface_displacement(&self, points: &[R3]) -> Vec<R3> {
        points.iter().map(|p| self.displacement(p)).collect()
    }

    /// Displacement projected onto a satellite line of sight, positive
    /// toward the satellite (range decrease).
    #[must_use]
    pub fn line_of_sight_displacement(&self, look: &SatelliteLook, xyz: &R3) -> Scalar {
        self.displacement(xyz).dot(&look.look_vector())
    }
}

/// Okada (1985) surface-displacement kernel for one Chinnery corner.
#[allow(clippy::too_many_arguments)]
fn corner(
    xi: Scalar,
    eta: Scalar,
    q: Scalar,
    sin_d: Scalar,
    cos_d: Scalar,
    alpha: Scalar,
    u1: Scalar,
    u2: Scalar,
    u3: Scalar,
) -> R3 {
    let y_tilde = eta * cos_d + q * sin_d;
    let d_tilde = eta * sin_d - q * cos_d;
    let r = (xi * xi + eta * eta + q * q).sqrt();
    let x = (xi * xi + q * q).sqrt();

    // ln(R + eta) and the 1/(R + ..) kernels degenerate on nodal lines
    let (ln_r_eta, inv_r_eta) = if (r + eta).abs() < EPS {
        (-(r - eta).ln(), 0.0)
    } else {
        ((r + eta).ln(), 1.0 / (r + eta))
    };
    let inv_r_xi = if (r + xi).abs() < EPS {
        0.0
    } else {
        1.0 / (r + xi)
    };
    let r_dt = r + d_tilde;

    // depth-dependent I terms
    let (i1, i2, i3, i4, i5);
    if cos_d.abs() < 1.0e-6 {
        // vertical fault limit
        i1 = -(alpha / 2.0) * xi * q / (r_dt * r_dt);
        i3 = (alpha / 2.0) * (eta / r_dt + y_tilde * q / (r_dt * r_dt) - ln_r_eta);
        i2 = -alpha * ln_r_eta - i3;
        i4 = -alpha * q / r_dt;
        i5 = -alpha * xi * sin_d / r_dt;
    } else {
        i4 = alpha / cos_d * ((r_dt).ln() - sin_d * ln_r_eta);
        i5 = if xi.abs() < EPS {
            0.0
        } else {
            alpha * 2.0 / cos_d
                * ((eta * (x + q * cos_d) + x * (r + x) * sin_d) / (xi * (r + x) * cos_d))
                    .atan()
        };
        i3 = alpha * (y_tilde / (cos_d * r_dt) - ln_r_eta) + sin_d / cos_d * i4;
        i2 = -alpha * ln_r_eta - i3;
        i1 = -(alpha / cos_d) * xi / r_dt - sin_d / cos_d * i5;
    }

    let theta = if q.abs() < EPS {
        0.0
    } else {
        (xi * eta / (q * r)).atan()
    };

    let two_pi = 2.0 * PI;
    let mut u = R3::zeros();

    if u1 != 0.0 {
        u.x -= u1 / two_pi * (xi * q * inv_r_eta / r + theta + i1 * sin_d);
        u.y -= u1 / two_pi * (y_tilde * q * inv_r_eta / r + q * cos_d * inv_r_eta + i2 * sin_d);
        u.z -= u1 / two_pi * (d_tilde * q * inv_r_eta / r + q * sin_d * inv_r_eta + i4 * sin_d);
    }
    if u2 != 0.0 {
        u.x -= u2 / two_pi * (q / r - i3 * sin_d * cos_d);
        u.y -= u2 / two_pi * (y_tilde * q * inv_r_xi / r + cos_d * theta - i1 * sin_d * cos_d);
        u.z -= u2 / two_pi * (d_tilde * q * inv_r_xi / r + sin_d * theta - i5 * sin_d * cos_d);
    }
    if u3 != 0.0 {
        u.x += u3 / two_pi * (q * q * inv_r_eta / r - i3 * sin_d * sin_d);
        u.y += u3 / two_pi
            * (-d_tilde * q * inv_r_xi / r - sin_d * (xi * q * inv_r_eta / r - theta)
                - i1 * sin_d * sin_d);
        u.z += u3 / two_pi
            * (y_tilde * q * inv_r_xi / r + cos_d * (xi * q * inv_r_eta / r - theta)
                - i5 * sin_d * sin_d);
    }
    u
}

/// Radar viewing geometry for projecting deformation into the line of
/// sight.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SatelliteLook {
    /// Incidence angle from vertical, in degrees.
    pub incidence: Scalar,
    /// Azimuth of the look direction toward the satellite, degrees
    /// clockwise from north.
    pub azimuth: Scalar,
}

impl SatelliteLook {
    /// Creates a look geometry; incidence must lie in [0, 90).
    pub fn new(incidence: Scalar, azimuth: Scalar) -> Result<Self> {
        require_finite("azimuth", azimuth)?;
        if !(0.0..90.0).contains(&incidence) {
            return Err(GeoanaError::InvalidParameter {
                name: "incidence",
                reason: format!("must be in [0, 90) degrees, got {incidence}"),
            });
        }
        Ok(Self { incidence, azimuth })
    }

    /// Unit vector from the ground toward the satellite in (east, north,
    /// up) components.
    #[must_use]
    pub fn look_vector(&self) -> R3 {
        let inc = self.incidence.to_radians();
        let az = self.azimuth.to_radians();
        R3::new(
            inc.sin() * az.sin(),
            inc.sin() * az.cos(),
            inc.cos(),
        )
    }
}

/// Wraps a line-of-sight displacement into interferometric phase in
/// (-π, π], using the two-way path factor 4π/λ.
pub fn wrapped_phase(los_displacement: Scalar, radar_wavelength: Scalar) -> Result<Scalar> {
    require_positive("radar_wavelength", radar_wavelength)?;
    let phase = -4.0 * PI / radar_wavelength * los_displacement;
    let wrapped = (phase + PI).rem_euclid(2.0 * PI) - PI;
    // rem_euclid lands in [-pi, pi); fold the open edge onto +pi
    Ok(if wrapped == -PI { PI } else { wrapped })
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    /// Fault matching the finite-source check case of Okada (1985),
    /// Table 2: L = 3, W = 2, dip = 70°, bottom-edge depth 4, receiver at
    /// fault coordinates (x, y) = (2, 3).
    fn table2_fault(rake: Scalar, slip: Scalar, opening: Scalar) -> OkadaFault {
        let dip: Scalar = 70.0;
        let depth = 4.0 - 0.5 * 2.0 * dip.to_radians().sin();
        OkadaFault::new(0.0, 0.0, depth, 3.0, 2.0, 0.0, dip, rake, slip, opening).unwrap()
    }

    fn table2_receiver(dip: Scalar) -> R3 {
        // strike 0 puts fault-x along north and fault-y along west, so the
        // published receiver (x, y) = (2, 3) sits at north 0.5, east
        // (W/2)cosδ - 3
        let north = 2.0 - 1.5;
        let east = 0.5 * 2.0 * dip.to_radians().cos() - 3.0;
        R3::new(east, north, 0.0)
    }

    #[test]
    fn strike_slip_matches_okada_table_2() {
        let fault = table2_fault(0.0, 1.0, 0.0);
        let u = fault.displacement(&table2_receiver(70.0));
        // published (ux, uy, uz) map to (north, -east, up)
        assert_relative_eq!(u.y, -8.689e-3, max_relative = 2.0e-3);
        assert_relative_eq!(-u.x, -4.298e-3, max_relative = 2.0e-3);
        assert_relative_eq!(u.z, -2.747e-3, max_relative = 2.0e-3);
    }

    #[test]
    fn dip_slip_matches_okada_table_2() {
        let fault = table2_fault(90.0, 1.0, 0.0);
        let u = fault.displacement(&table2_receiver(70.0));
        assert_relative_eq!(u.y, -4.682e-3, max_relative = 2.0e-3);
        assert_relative_eq!(-u.x, -3.527e-2, max_relative = 2.0e-3);
        assert_relative_eq!(u.z, -3.564e-2, max_relative = 2.0e-3);
    }

    #[test]
    fn tensile_matches_okada_table_2() {
        let fault = table2_fault(0.0, 0.0, 1.0);
        let u = fault.displacement(&table2_receiver(70.0));
        assert_relative_eq!(u.y, -2.660e-4, max_relative = 5.0e-3);
        assert_relative_eq!(-u.x, 1.056e-2, max_relative = 2.0e-3);
        assert_relative_eq!(u.z, 3.214e-3, max_relative = 2.0e-3);
    }

    #[test]
    fn zero_slip_produces_zero_displacement() {
        let fault =
            OkadaFault::new(0.0, 0.0, 5.0e3, 1.0e4, 5.0e3, 30.0, 45.0, 20.0, 0.0, 0.0).unwrap();
        let u = fault.displacement(&R3::new(2.0e3, -1.0e3, 0.0));
        assert_abs_diff_eq!(u.norm(), 0.0, epsilon = 1.0e-15);
    }

    #[test]
    fn displacement_decays_in_the_far_field() {
        let fault =
            OkadaFault::new(0.0, 0.0, 5.0e3, 1.0e4, 5.0e3, 0.0, 45.0, 90.0, 2.0, 0.0).unwrap();
        let near = fault.displacement(&R3::new(3.0e3, 0.0, 0.0)).norm();
        let far = fault.displacement(&R3::new(1.0e6, 0.0, 0.0)).norm();
        assert!(near > 1.0e-2, "near-field displacement should be cm-scale");
        assert!(far < near * 1.0e-3);
    }

    #[test]
    fn vertical_strike_slip_is_antisymmetric_across_the_trace() {
        // north-striking vertical fault, left-lateral slip
        let fault =
            OkadaFault::new(0.0, 0.0, 4.0e3, 8.0e3, 4.0e3, 0.0, 90.0, 0.0, 1.0, 0.0).unwrap();
        let east = fault.displacement(&R3::new(2.0e3, 1.0e3, 0.0));
        let west = fault.displacement(&R3::new(-2.0e3, 1.0e3, 0.0));
        // along-strike (north) component flips across the trace
        assert_relative_eq!(east.y, -west.y, max_relative = 1.0e-8);
        assert_relative_eq!(east.z, -west.z, max_relative = 1.0e-8);
    }

    #[test]
    fn thrust_uplifts_the_hanging_wall_side() {
        // east-dipping thrust striking north: hanging wall overlies the
        // patch on the east side of the up-dip trace
        let fault =
            OkadaFault::new(0.0, 0.0, 4.0e3, 1.0e4, 6.0e3, 0.0, 30.0, 90.0, 2.0, 0.0).unwrap();
        let hanging = fault.displacement(&R3::new(1.0e3, 0.0, 0.0));
        let foot = fault.displacement(&R3::new(-8.0e3, 0.0, 0.0));
        assert!(hanging.z.abs().max(foot.z.abs()) > 1.0e-2);
        assert!(hanging.z > foot.z);
    }

    #[test]
    fn los_projection_and_phase_wrapping() {
        let look = SatelliteLook::new(23.0, 100.0).unwrap();
        let l = look.look_vector();
        assert_relative_eq!(l.norm(), 1.0, epsilon = 1.0e-12);
        assert!(l.z > 0.9);

        // pure uplift of 1 cm seen by C-band radar (5.6 cm wavelength)
        let phase = wrapped_phase(0.01 * l.z, 0.056).unwrap();
        let expected = -4.0 * PI / 0.056 * 0.01 * l.z;
        let rewrapped = (expected + PI).rem_euclid(2.0 * PI) - PI;
        assert_relative_eq!(phase, rewrapped, epsilon = 1.0e-12);
        assert!(phase > -PI && phase <= PI);
        assert!(wrapped_phase(1.0, 0.0).is_err());
    }
}
