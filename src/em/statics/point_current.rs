use std::f64::consts::PI;

use super::dipole::SINGULARITY_GUARD;
use crate::errors::Result;
use crate::math::{R3, Scalar};
use crate::utils::{require_finite, require_positive};

/// DC point current electrode in an unbounded conductive medium.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PointCurrentWholeSpace {
    /// Background conductivity σ in S/m.
    pub conductivity: Scalar,
    /// Injected current I in amperes.
    pub current: Scalar,
    /// Electrode location in meters.
    pub location: R3,
}

impl PointCurrentWholeSpace {
    /// Creates a whole-space electrode; σ must be strictly positive.
    pub fn new(conductivity: Scalar, current: Scalar, location: R3) -> Result<Self> {
        require_positive("conductivity", conductivity)?;
        require_finite("current", current)?;
        Ok(Self {
            conductivity,
            current,
            location,
        })
    }

    /// Electric potential V = I / (4πσr).
    ///
    /// Receivers within 1e-12 m of the electrode return 0.
    #[must_use]
    pub fn potential(&self, xyz: &R3) -> Scalar {
        let r = (xyz - self.location).norm();
        if r <= SINGULARITY_GUARD {
            return 0.0;
        }
        self.current / (4.0 * PI * self.conductivity * r)
    }

    /// Electric field E = I r̂ / (4πσr²).
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3::zeros();
        }
        r_vec * (self.current / (4.0 * PI * self.conductivity * r * r * r))
    }

    /// Current density J = σE.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> R3 {
        self.electric_field(xyz) * self.conductivity
    }
}

/// DC point electrode on the surface of a conductive half-space (z <= 0).
///
/// The free-surface image doubles the whole-space kernel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PointCurrentHalfSpace {
    /// Half-space conductivity σ in S/m.
    pub conductivity: Scalar,
    /// Injected current I in amperes.
    pub current: Scalar,
    /// Electrode location on the surface (z = 0).
    pub location: R3,
}

impl PointCurrentHalfSpace {
    /// Creates a surface electrode; the location must sit on z = 0.
    pub fn new(conductivity: Scalar, current: Scalar, location: R3) -> Result<Self> {
        require_positive("conductivity", conductivity)?;
        require_finite("current", current)?;
        if location.z.abs() > SINGULARITY_GUARD {
            return Err(crate::errors::GeoanaError::InvalidParameter {
                name: "location",
                reason: format!("electrode must sit on the surface z = 0, got z = {}", location.z),
            });
        }
        Ok(Self {
            conductivity,
            current,
            location,
        })
    }

    /// Electric potential V = I / (2πσr).
    #[must_use]
    pub fn potential(&self, xyz: &R3) -> Scalar {
        let r = (xyz - self.location).norm();
        if r <= SINGULARITY_GUARD {
            return 0.0;
        }
        self.current / (2.0 * PI * self.conductivity * r)
    }

    /// Electric field E = I r̂ / (2πσr²).
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3::zeros();
        }
        r_vec * (self.current / (2.0 * PI * self.conductivity * r * r * r))
    }

    /// Current density J = σE.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> R3 {
        self.electric_field(xyz) * self.conductivity
    }
}

/// Pair of surface electrodes injecting +I and -I (a DC resistivity dipole).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct DipoleHalfSpace {
    positive: PointCurrentHalfSpace,
    negative: PointCurrentHalfSpace,
}

impl DipoleHalfSpace {
    /// Creates an electrode pair at `location_a` (+I) and `location_b` (-I).
    pub fn new(
        conductivity: Scalar,
        current: Scalar,
        location_a: R3,
        location_b: R3,
    ) -> Result<Self> {
        Ok(Self {
            positive: PointCurrentHalfSpace::new(conductivity, current, location_a)?,
            negative: PointCurrentHalfSpace::new(conductivity, -current, location_b)?,
        })
    }

    /// Superposed potential of the two electrodes.
    #[must_use]
    pub fn potential(&self, xyz: &R3) -> Scalar {
        self.positive.potential(xyz) + self.negative.potential(xyz)
    }

    /// Superposed electric field of the two electrodes.
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> R3 {
        self.positive.electric_field(xyz) + self.negative.electric_field(xyz)
    }

    /// Superposed current density of the two electrodes.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> R3 {
        self.positive.current_density(xyz) + self.negative.current_density(xyz)
    }
}
