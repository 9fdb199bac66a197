//! Frequency-domain regime: time-harmonic whole-space solutions.

mod electric_dipole;
mod magnetic_dipole;
mod plane_wave;

pub use electric_dipole::ElectricDipoleWholeSpace;
pub use magnetic_dipole::MagneticDipoleWholeSpace;
pub use plane_wave::HarmonicPlaneWave;

use crate::constants::angular_frequency;
use crate::em::base::Medium;
use crate::errors::Result;
use crate::math::{CScalar, Scalar};

/// Angular frequency ω = 2πf.
#[must_use]
pub fn omega(frequency: Scalar) -> Scalar {
    angular_frequency(frequency)
}

/// Effective conductivity σ̂ = σ + iωε of `medium` at `frequency` Hz.
#[must_use]
pub fn sigma_hat(frequency: Scalar, medium: &Medium) -> CScalar {
    medium.sigma_hat(angular_frequency(frequency))
}

/// Complex wavenumber of `medium` at `frequency` Hz.
#[must_use]
pub fn wavenumber(frequency: Scalar, medium: &Medium) -> CScalar {
    medium.wavenumber(angular_frequency(frequency))
}

/// Quasi-static skin depth of `medium` at `frequency` Hz.
pub fn skin_depth(frequency: Scalar, medium: &Medium) -> Result<Scalar> {
    medium.skin_depth(frequency)
}
