//! Shared abstractions for the electromagnetic solvers: media and sources.

use num_complex::Complex;

use crate::constants::{angular_frequency, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::errors::Result;
use crate::math::{CScalar, R3, Scalar};
use crate::utils::{require_finite, require_positive, require_unit};

/// Linear isotropic medium parameters expressed in SI units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    /// Electrical conductivity σ in S/m.
    pub conductivity: Scalar,
    /// Magnetic permeability μ in H/m.
    pub permeability: Scalar,
    /// Electric permittivity ε in F/m.
    pub permittivity: Scalar,
}

impl Medium {
    /// Creates a medium with validated parameters (σ >= 0, μ > 0, ε > 0).
    pub fn new(conductivity: Scalar, permeability: Scalar, permittivity: Scalar) -> Result<Self> {
        require_finite("conductivity", conductivity)?;
        if conductivity < 0.0 {
            return Err(crate::errors::GeoanaError::InvalidParameter {
                name: "conductivity",
                reason: format!("must be >= 0, got {conductivity}"),
            });
        }
        require_positive("permeability", permeability)?;
        require_positive("permittivity", permittivity)?;
        Ok(Self {
            conductivity,
            permeability,
            permittivity,
        })
    }

    /// Free space: σ = 0, μ = μ₀, ε = ε₀.
    #[must_use]
    pub const fn vacuum() -> Self {
        Self {
            conductivity: 0.0,
            permeability: VACUUM_PERMEABILITY,
            permittivity: VACUUM_PERMITTIVITY,
        }
    }

    /// Conductive whole space with free-space μ and ε.
    pub fn whole_space(conductivity: Scalar) -> Result<Self> {
        Self::new(conductivity, VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY)
    }

    /// Effective (complex) conductivity σ̂ = σ + iωε at angular frequency ω.
    #[must_use]
    pub fn sigma_hat(&self, omega: Scalar) -> CScalar {
        Complex::new(self.conductivity, omega * self.permittivity)
    }

    /// Complex wavenumber k = sqrt(ω²με - iωμσ), root with Re(k) >= 0.
    ///
    /// Uses the e^{+iωt} time convention, so a lossy medium gives
    /// Im(k) < 0 and decaying e^{-ikr} propagators.
    #[must_use]
    pub fn wavenumber(&self, omega: Scalar) -> CScalar {
        let k2 = Complex::new(
            omega * omega * self.permeability * self.permittivity,
            -omega * self.permeability * self.conductivity,
        );
        // principal sqrt already has non-negative real part
        k2.sqrt()
    }

    /// Quasi-static skin depth δ = sqrt(2 / (ωμσ)) at frequency `hz`.
    pub fn skin_depth(&self, hz: Scalar) -> Result<Scalar> {
        require_positive("frequency", hz)?;
        require_positive("conductivity", self.conductivity)?;
        let omega = angular_frequency(hz);
        Ok((2.0 / (omega * self.permeability * self.conductivity)).sqrt())
    }

    /// Quasi-static (diffusion) wavenumber sqrt(-iωμσ) = (1 - i)/δ,
    /// the ε -> 0 limit of [`Medium::wavenumber`].
    #[must_use]
    pub fn diffusion_wavenumber(&self, omega: Scalar) -> CScalar {
        Complex::new(0.0, -omega * self.permeability * self.conductivity).sqrt()
    }
}

/// Electric current dipole: a short grounded wire of length ds carrying I.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricDipole {
    /// Source location in meters.
    pub location: R3,
    /// Unit orientation of current flow; normalized on construction.
    pub orientation: R3,
    /// Current I in amperes.
    pub current: Scalar,
    /// Wire length ds in meters.
    pub length: Scalar,
}

impl ElectricDipole {
    /// Creates a dipole, normalizing the orientation and validating the
    /// geometry.
    pub fn new(location: R3, orientation: R3, current: Scalar, length: Scalar) -> Result<Self> {
        let orientation = require_unit("orientation", orientation)?;
        require_finite("current", current)?;
        require_positive("length", length)?;
        Ok(Self {
            location,
            orientation,
            current,
            length,
        })
    }

    /// Dipole moment I·ds in A·m.
    #[must_use]
    pub fn moment(&self) -> Scalar {
        self.current * self.length
    }
}

/// Point magnetic dipole of moment m (A·m²), e.g. a small current loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticDipole {
    /// Source location in meters.
    pub location: R3,
    /// Unit orientation of the moment; normalized on construction.
    pub orientation: R3,
    /// Moment magnitude in A·m².
    pub moment: Scalar,
}

impl MagneticDipole {
    /// Creates a dipole, normalizing the orientation.
    pub fn new(location: R3, orientation: R3, moment: Scalar) -> Result<Self> {
        let orientation = require_unit("orientation", orientation)?;
        require_finite("moment", moment)?;
        Ok(Self {
            location,
            orientation,
            moment,
        })
    }

    /// Moment vector m·m̂.
    #[must_use]
    pub fn moment_vector(&self) -> R3 {
        self.orientation * self.moment
    }
}
