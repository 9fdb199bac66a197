use std::f64::consts::PI;

use super::theta;
use crate::em::base::{MagneticDipole, Medium};
use crate::errors::Result;
use crate::math::{project_onto, R3, Scalar};
use crate::special::erf;

const ROOT_PI: Scalar = 1.772_453_850_905_516;

/// Transient magnetic dipole in a conductive whole space (step turn-off).
///
/// The t -> 0+ limit is the static dipole; at late time the field aligns
/// with the moment and decays as t^{-3/2}.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct MagneticDipoleWholeSpace {
    /// Background medium; σ must be positive for diffusion.
    pub medium: Medium,
    /// Source description.
    pub dipole: MagneticDipole,
}

impl MagneticDipoleWholeSpace {
    /// Creates a transient dipole source in a conductive medium.
    pub fn new(medium: Medium, dipole: MagneticDipole) -> Result<Self> {
        crate::utils::require_positive("conductivity", medium.conductivity)?;
        Ok(Self { medium, dipole })
    }

    /// Magnetic field at `xyz` a time `t` after turn-off:
    /// h = m/(4πr³) { r̂(r̂·m̂)[3erf(u) - 2u(3+2u²)/√π e^{-u²}]
    ///              - m̂[erf(u) - 2u(1+2u²)/√π e^{-u²}] }, u = θr.
    pub fn magnetic_field(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        let th = theta(t, &self.medium)?;
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return Ok(R3::zeros());
        }
        let r_hat = r_vec / r;
        let m_hat = self.dipole.orientation;
        let u = th * r;
        let gauss = (-u * u).exp();
        let front = self.dipole.moment / (4.0 * PI * r * r * r);
        let symmetric = 3.0 * erf(u) - 2.0 * u * (3.0 + 2.0 * u * u) / ROOT_PI * gauss;
        let oriented = erf(u) - 2.0 * u * (1.0 + 2.0 * u * u) / ROOT_PI * gauss;
        Ok((project_onto(&r_hat, &m_hat) * symmetric - m_hat * oriented) * front)
    }

    /// Magnetic flux density B = μH.
    pub fn magnetic_flux_density(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        Ok(self.magnetic_field(xyz, t)? * self.medium.permeability)
    }

    /// Time derivative dH/dt; the brackets above differentiate to
    /// 8u⁴/√π e^{-u²} and 8u²(u²-1)/√π e^{-u²}.
    pub fn magnetic_field_time_derivative(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        let th = theta(t, &self.medium)?;
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return Ok(R3::zeros());
        }
        let r_hat = r_vec / r;
        let m_hat = self.dipole.orientation;
        let u = th * r;
        let gauss = (-u * u).exp();
        let front = self.dipole.moment / (4.0 * PI * r * r * r);
        let du_dt = -u / (2.0 * t);
        let symmetric = 8.0 * u.powi(4) / ROOT_PI * gauss;
        let oriented = 8.0 * u * u * (u * u - 1.0) / ROOT_PI * gauss;
        Ok((project_onto(&r_hat, &m_hat) * symmetric - m_hat * oriented) * (front * du_dt))
    }

    /// Induced electric field, azimuthal about the moment axis:
    /// e = 2mθ⁵r/(π^{3/2}σ) e^{-u²} (m̂ × r̂).
    pub fn electric_field(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        let th = theta(t, &self.medium)?;
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return Ok(R3::zeros());
        }
        let u = th * r;
        let coeff = 2.0 * self.dipole.moment * th.powi(5) * r
            / (PI * ROOT_PI * self.medium.conductivity)
            * (-u * u).exp();
        Ok(self.dipole.orientation.cross(&(r_vec / r)) * coeff)
    }
}
