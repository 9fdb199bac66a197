use num_complex::Complex;

use crate::constants::angular_frequency;
use crate::em::base::Medium;
use crate::errors::{GeoanaError, Result};
use crate::math::{CScalar, C3, R3, Scalar};
use crate::utils::{require_finite, require_positive, require_unit};

/// Uniform plane wave propagating along +z through a homogeneous medium.
///
/// Polarization lies in the x-y plane; fields carry the e^{-ikz} propagator
/// under the e^{+iωt} convention.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct HarmonicPlaneWave {
    /// Background medium.
    pub medium: Medium,
    /// Frequency in Hz.
    pub frequency: Scalar,
    /// Electric field amplitude E₀ in V/m.
    pub amplitude: Scalar,
    /// Unit polarization vector, perpendicular to z.
    pub orientation: R3,
}

impl HarmonicPlaneWave {
    /// Creates a plane wave; the polarization must be transverse.
    pub fn new(
        medium: Medium,
        frequency: Scalar,
        amplitude: Scalar,
        orientation: R3,
    ) -> Result<Self> {
        require_positive("frequency", frequency)?;
        require_finite("amplitude", amplitude)?;
        let orientation = require_unit("orientation", orientation)?;
        if orientation.z.abs() > 1.0e-8 {
            return Err(GeoanaError::InvalidParameter {
                name: "orientation",
                reason: format!(
                    "polarization must lie in the x-y plane, got z component {}",
                    orientation.z
                ),
            });
        }
        Ok(Self {
            medium,
            frequency,
            amplitude,
            orientation,
        })
    }

    fn wavenumber(&self) -> CScalar {
        self.medium.wavenumber(angular_frequency(self.frequency))
    }

    fn propagator(&self, z: Scalar) -> CScalar {
        (Complex::new(0.0, -1.0) * self.wavenumber() * z).exp()
    }

    /// Electric field E = E₀ ê e^{-ikz}.
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> C3 {
        let phase = self.propagator(xyz.z) * self.amplitude;
        C3::new(
            phase * Complex::new(self.orientation.x, 0.0),
            phase * Complex::new(self.orientation.y, 0.0),
            Complex::new(0.0, 0.0),
        )
    }

    /// Magnetic field H = (k/ωμ) (ẑ × E).
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> C3 {
        let omega = angular_frequency(self.frequency);
        let admittance = self.wavenumber() / Complex::new(omega * self.medium.permeability, 0.0);
        let e = self.electric_field(xyz);
        // ẑ × (ex, ey, 0) = (-ey, ex, 0)
        C3::new(-e.y * admittance, e.x * admittance, Complex::new(0.0, 0.0))
    }

    /// Current density J = σ̂E.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> C3 {
        let sigma_hat = self.medium.sigma_hat(angular_frequency(self.frequency));
        self.electric_field(xyz) * sigma_hat
    }

    /// Complex wave impedance Z = ωμ/k.
    #[must_use]
    pub fn impedance(&self) -> CScalar {
        Complex::new(angular_frequency(self.frequency) * self.medium.permeability, 0.0)
            / self.wavenumber()
    }

    /// Wavelength 2π/Re(k).
    #[must_use]
    pub fn wavelength(&self) -> Scalar {
        2.0 * std::f64::consts::PI / self.wavenumber().re
    }

    /// Phase velocity ω/Re(k).
    #[must_use]
    pub fn phase_velocity(&self) -> Scalar {
        angular_frequency(self.frequency) / self.wavenumber().re
    }
}
