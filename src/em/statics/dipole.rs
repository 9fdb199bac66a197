use std::f64::consts::PI;

use crate::em::base::{Medium, MagneticDipole};
use crate::math::{project_onto, R3, Scalar};

/// Threshold below which a receiver is treated as sitting on the source.
pub(crate) const SINGULARITY_GUARD: Scalar = 1.0e-12;

/// Static magnetic dipole in an unbounded homogeneous medium.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct MagneticDipoleWholeSpace {
    /// Background medium (only μ enters the static solution).
    pub medium: Medium,
    /// Source description.
    pub dipole: MagneticDipole,
}

impl MagneticDipoleWholeSpace {
    /// Vector potential A = μ/(4π) m × r̂ / r².
    ///
    /// Receivers within 1e-12 m of the source return zeros.
    #[must_use]
    pub fn vector_potential(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3::zeros();
        }
        let coeff = self.medium.permeability / (4.0 * PI * r * r * r);
        self.dipole.moment_vector().cross(&r_vec) * coeff
    }

    /// Magnetic flux density B = μ/(4π r³) [3 r̂ (r̂·m) - m].
    #[must_use]
    pub fn magnetic_flux_density(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3::zeros();
        }
        let r_hat = r_vec / r;
        let m = self.dipole.moment_vector();
        let coeff = self.medium.permeability / (4.0 * PI * r * r * r);
        (project_onto(&r_hat, &m) * 3.0 - m) * coeff
    }

    /// Magnetic field H = B/μ.
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> R3 {
        self.magnetic_flux_density(xyz) / self.medium.permeability
    }
}

/// Isolated static magnetic pole (useful as a building block for long rods).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct MagneticPoleWholeSpace {
    /// Background medium.
    pub medium: Medium,
    /// Pole location in meters.
    pub location: R3,
    /// Pole strength in A·m.
    pub moment: Scalar,
}

impl MagneticPoleWholeSpace {
    /// Radial magnetic field H = m r̂ / (4π r²).
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3::zeros();
        }
        r_vec * (self.moment / (4.0 * PI * r * r * r))
    }

    /// Magnetic flux density B = μH.
    #[must_use]
    pub fn magnetic_flux_density(&self, xyz: &R3) -> R3 {
        self.magnetic_field(xyz) * self.medium.permeability
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::VACUUM_PERMEABILITY;

    fn z_dipole(moment: Scalar) -> MagneticDipoleWholeSpace {
        MagneticDipoleWholeSpace {
            medium: Medium::vacuum(),
            dipole: MagneticDipole::new(R3::zeros(), R3::z(), moment).unwrap(),
        }
    }

    #[test]
    fn axial_field_is_twice_equatorial() {
        let source = z_dipole(2.0);
        let b_axial = source.magnetic_flux_density(&R3::new(0.0, 0.0, 1.0));
        let b_equatorial = source.magnetic_flux_density(&R3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(b_axial.z, -2.0 * b_equatorial.z, max_relative = 1.0e-12);
        assert_relative_eq!(
            b_axial.z,
            2.0 * VACUUM_PERMEABILITY * 2.0 / (4.0 * PI),
            max_relative = 1.0e-12
        );
        assert_relative_eq!(b_axial.x, 0.0, epsilon = 1.0e-18);
    }

    #[test]
    fn curl_of_vector_potential_recovers_flux_density() {
        // central differences of A against the closed-form B
        let source = z_dipole(1.5);
        let p = R3::new(0.7, -0.4, 0.9);
        let h = 1.0e-5;
        let dx = R3::new(h, 0.0, 0.0);
        let dy = R3::new(0.0, h, 0.0);
        let dz = R3::new(0.0, 0.0, h);
        let da_dx = (source.vector_potential(&(p + dx)) - source.vector_potential(&(p - dx))) / (2.0 * h);
        let da_dy = (source.vector_potential(&(p + dy)) - source.vector_potential(&(p - dy))) / (2.0 * h);
        let da_dz = (source.vector_potential(&(p + dz)) - source.vector_potential(&(p - dz))) / (2.0 * h);
        let curl = R3::new(da_dy.z - da_dz.y, da_dz.x - da_dx.z, da_dx.y - da_dy.x);
        let b = source.magnetic_flux_density(&p);
        assert_relative_eq!((curl - b).norm(), 0.0, epsilon = 1.0e-12 + 1.0e-6 * b.norm());
    }

    #[test]
    fn pole_field_is_radial_inverse_square() {
        let pole = MagneticPoleWholeSpace {
            medium: Medium::vacuum(),
            location: R3::zeros(),
            moment: 4.0 * PI,
        };
        let h = pole.magnetic_field(&R3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(h.y, 0.25, max_relative = 1.0e-12);
        assert_relative_eq!(h.x, 0.0, epsilon = 1.0e-15);
    }
}
