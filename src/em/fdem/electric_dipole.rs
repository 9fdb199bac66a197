use std::f64::consts::PI;

use num_complex::Complex;

use crate::constants::angular_frequency;
use crate::em::base::{ElectricDipole, Medium};
use crate::errors::Result;
use crate::math::{complexify, CScalar, C3, R3};
use crate::utils::require_positive;

/// Time-harmonic electric current dipole in an unbounded homogeneous medium.
///
/// Fields follow the e^{+iωt} convention with propagator e^{-ikr}; the
/// static limit recovers the DC dipole and the Biot-Savart element.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ElectricDipoleWholeSpace {
    /// Background medium.
    pub medium: Medium,
    /// Source description.
    pub dipole: ElectricDipole,
    /// Operating frequency in Hz.
    pub frequency: f64,
}

impl ElectricDipoleWholeSpace {
    /// Creates a harmonic dipole source at `frequency` Hz.
    pub fn new(medium: Medium, dipole: ElectricDipole, frequency: f64) -> Result<Self> {
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
        let d_hat = complexify(&self.dipole.orientation);
        Some((r, r_hat, d_hat, ikr, attenuation))
    }

    /// Electric field E(r) with the whole-space tensor structure
    /// (-k²r² + 3ikr + 3) r̂(r̂·d̂) + (k²r² - ikr - 1) d̂.
    ///
    /// Receivers within 1e-12 m of the source return zeros.
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> C3 {
        let Some((r, r_hat, d_hat, ikr, attenuation)) = self.kernel(xyz) else {
            return C3::zeros();
        };
        let omega = angular_frequency(self.frequency);
        let sigma_hat = self.medium.sigma_hat(omega);
        let one = Complex::new(1.0, 0.0);
        let k2r2 = -ikr * ikr;
        let front = attenuation * self.dipole.moment() / (4.0 * PI * sigma_hat * r * r * r);
        let symmetric = r_hat * (r_hat.dot(&d_hat) * (-k2r2 + 3.0 * ikr + 3.0 * one));
        let oriented = d_hat * (k2r2 - ikr - one);
        (symmetric + oriented) * front
    }

    /// Current density J = σ̂E.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> C3 {
        let sigma_hat = self.medium.sigma_hat(angular_frequency(self.frequency));
        self.electric_field(xyz) * sigma_hat
    }

    /// Magnetic field H = Ids/(4πr²) (ikr + 1) e^{-ikr} (d̂ × r̂).
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> C3 {
        let Some((r, r_hat, d_hat, ikr, attenuation)) = self.kernel(xyz) else {
            return C3::zeros();
        };
        let one = Complex::new(1.0, 0.0);
        let front = attenuation * self.dipole.moment() / (4.0 * PI * r * r);
        d_hat.cross(&r_hat) * ((ikr + one) * front)
    }

    /// Magnetic flux density B = μH.
    #[must_use]
    pub fn magnetic_flux_density(&self, xyz: &R3) -> C3 {
        self.magnetic_field(xyz) * Complex::new(self.medium.permeability, 0.0)
    }
}
