use std::f64::consts::PI;

use num_complex::Complex;

use crate::constants::angular_frequency;
use crate::em::base::{MagneticDipole, Medium};
use crate::errors::Result;
use crate::math::{complexify, CScalar, C3, R3};
use crate::utils::require_positive;

/// Time-harmonic magnetic dipole in an unbounded homogeneous medium.
///
/// Dual of the electric dipole: H carries the tensor bracket, E is the
/// azimuthal induction term -iωA.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct MagneticDipoleWholeSpace {
    /// Background medium.
    pub medium: Medium,
    /// Source description.
    pub dipole: MagneticDipole,
    /// Operating frequency in Hz.
    pub frequency: f64,
}

impl MagneticDipoleWholeSpace {
    /// Creates a harmonic dipole source at `frequency` Hz.
    pub fn new(medium: Medium, dipole: MagneticDipole, frequency: f64) -> Result<Self> {
        require_positive("frequency", frequency)?;
        Ok(Self {
            medium,
            dipole,
            frequency,
        })
    }

    fn kernel(&self, xyz: &R3) -> Option<(f64, C3, C3, CScalar, CScalar)> {
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return None;
        }
        let omega = angular_frequency(self.frequency);
        let k = self.medium.wavenumber(omega);
        let ikr = Complex::new(0.0, 1.0) * k * r;
        let attenuation = (-ikr).exp();
        let r_hat = complexify(&(r_vec / r));
        let m_hat = complexify(&self.dipole.orientation);
        Some((r, r_hat, m_hat, ikr, attenuation))
    }

    /// Magnetic field H = m/(4πr³) e^{-ikr}
    /// [(-k²r² + 3ikr + 3) r̂(r̂·m̂) + (k²r² - ikr - 1) m̂].
    ///
    /// Receivers within 1e-12 m of the source return zeros.
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> C3 {
        let Some((r, r_hat, m_hat, ikr, attenuation)) = self.kernel(xyz) else {
            return C3::zeros();
        };
        let one = Complex::new(1.0, 0.0);
        let k2r2 = -ikr * ikr;
        let front = attenuation * self.dipole.moment / (4.0 * PI * r * r * r);
        let symmetric = r_hat * (r_hat.dot(&m_hat) * (-k2r2 + 3.0 * ikr + 3.0 * one));
        let oriented = m_hat * (k2r2 - ikr - one);
        (symmetric + oriented) * front
    }

    /// Magnetic flux density B = μH.
    #[must_use]
    pub fn magnetic_flux_density(&self, xyz: &R3) -> C3 {
        self.magnetic_field(xyz) * Complex::new(self.medium.permeability, 0.0)
    }

    /// Electric field E = iωμ m/(4πr²) (ikr + 1) e^{-ikr} (r̂ × m̂),
    /// i.e. -iωA for the dipole vector potential.
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> C3 {
        let Some((r, r_hat, m_hat, ikr, attenuation)) = self.kernel(xyz) else {
            return C3::zeros();
        };
        let omega = angular_frequency(self.frequency);
        let one = Complex::new(1.0, 0.0);
        let front = Complex::new(0.0, omega * self.medium.permeability)
            * attenuation
            * self.dipole.moment
            / (4.0 * PI * r * r);
        r_hat.cross(&m_hat) * ((ikr + one) * front)
    }

    /// Current density J = σ̂E.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> C3 {
        let sigma_hat = self.medium.sigma_hat(angular_frequency(self.frequency));
        self.electric_field(xyz) * sigma_hat
    }
}
