use std::f64::consts::PI;

use super::theta;
use crate::em::base::{MagneticDipole, Medium};
use crate::errors::{GeoanaError, Result};
use crate::math::{R3, Scalar};
use crate::special::erf;

const ROOT_PI: Scalar = 1.772_453_850_905_516;

/// Vertical magnetic dipole on the surface of a conductive half-space.
///
/// Surface fields after step turn-off at radial offset ρ, the classic
/// central/offset-loop sounding geometry. h_z starts at the static value
/// -m/(4πρ³), passes through a sign reversal, and decays as t^{-3/2}.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct VerticalMagneticDipoleHalfSpace {
    /// Half-space medium; σ must be positive.
    pub medium: Medium,
    /// Dipole source; the orientation must be vertical (+z).
    pub dipole: MagneticDipole,
}

impl VerticalMagneticDipoleHalfSpace {
    /// Creates a vertical-dipole sounding source on the surface.
    pub fn new(medium: Medium, dipole: MagneticDipole) -> Result<Self> {
        crate::utils::require_positive("conductivity", medium.conductivity)?;
        if (dipole.orientation - R3::z()).norm() > 1.0e-8 {
            return Err(GeoanaError::InvalidParameter {
                name: "orientation",
                reason: "the half-space solution requires a vertical (+z) dipole".into(),
            });
        }
        if dipole.location.z.abs() > 1.0e-8 {
            return Err(GeoanaError::InvalidParameter {
                name: "location",
                reason: format!(
                    "the dipole must sit on the surface z = 0, got z = {}",
                    dipole.location.z
                ),
            });
        }
        Ok(Self { medium, dipole })
    }

    fn offset(&self, xyz: &R3) -> Result<Scalar> {
        let rho = (xyz.x - self.dipole.location.x).hypot(xyz.y - self.dipole.location.y);
        if rho <= 1.0e-12 {
            return Err(GeoanaError::Singularity(xyz.x, xyz.y, xyz.z));
        }
        Ok(rho)
    }

    /// Vertical magnetic field h_z at a surface receiver:
    /// h_z = m/(4πρ³) [(9/(2u²) - 1) erf(u) - (9/u + 4u)/√π e^{-u²}], u = θρ.
    ///
    /// The receiver's z coordinate is ignored; the solution is only valid on
    /// the surface.
    pub fn magnetic_field(&self, xyz: &R3, t: Scalar) -> Result<Scalar> {
        let th = theta(t, &self.medium)?;
        let rho = self.offset(xyz)?;
        let u = th * rho;
        let gauss = (-u * u).exp();
        let bracket =
            (9.0 / (2.0 * u * u) - 1.0) * erf(u) - (9.0 / u + 4.0 * u) / ROOT_PI * gauss;
        Ok(self.dipole.moment / (4.0 * PI * rho.powi(3)) * bracket)
    }

    /// Time derivative dh_z/dt at a surface receiver:
    /// dh_z/dt = m/(2πμσρ⁵) [9 erf(u) - 2u(9 + 6u² + 4u⁴)/√π e^{-u²}].
    pub fn magnetic_field_time_derivative(&self, xyz: &R3, t: Scalar) -> Result<Scalar> {
        let th = theta(t, &self.medium)?;
        let rho = self.offset(xyz)?;
        let u = th * rho;
        let gauss = (-u * u).exp();
        let bracket =
            9.0 * erf(u) - 2.0 * u * (9.0 + 6.0 * u * u + 4.0 * u.powi(4)) / ROOT_PI * gauss;
        Ok(self.dipole.moment
            / (2.0 * PI * self.medium.permeability * self.medium.conductivity * rho.powi(5))
            * bracket)
    }
}
