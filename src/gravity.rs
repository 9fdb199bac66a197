//! Analytical gravitational solutions for simple bodies.

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::errors::Result;
use crate::math::{R3, R3x3, Scalar};
use crate::utils::require_positive;

const SINGULARITY_GUARD: Scalar = 1.0e-12;

/// Gravitational point mass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PointMass {
    /// Mass in kg.
    pub mass: Scalar,
    /// Location in meters.
    pub location: R3,
}

impl PointMass {
    /// Creates a point mass; the mass must be positive.
    pub fn new(mass: Scalar, location: R3) -> Result<Self> {
        require_positive("mass", mass)?;
        Ok(Self { mass, location })
    }

    /// Gravitational potential U = Gm/r in m²/s².
    ///
    /// Receivers within 1e-12 m of the mass return 0.
    #[must_use]
    pub fn gravitational_potential(&self, xyz: &R3) -> Scalar {
        let r = (xyz - self.location).norm();
        if r <= SINGULARITY_GUARD {
            return 0.0;
        }
        GRAVITATIONAL_CONSTANT * self.mass / r
    }

    /// Gravitational field g = -Gm r_vec/r³ in m/s², pointing toward the
    /// mass.
    #[must_use]
    pub fn gravitational_field(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3::zeros();
        }
        r_vec * (-GRAVITATIONAL_CONSTANT * self.mass / (r * r * r))
    }

    /// Gravitational gradient tensor -Gm (I/r³ - 3 r⊗r/r⁵) in 1/s²;
    /// symmetric and traceless away from the source.
    #[must_use]
    pub fn gravitational_gradient(&self, xyz: &R3) -> R3x3 {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r <= SINGULARITY_GUARD {
            return R3x3::zeros();
        }
        let identity_term = R3x3::identity() / r.powi(3);
        let outer_term = r_vec * r_vec.transpose() * (3.0 / r.powi(5));
        (identity_term - outer_term) * (-GRAVITATIONAL_CONSTANT * self.mass)
    }
}

/// Uniform-density sphere; exterior fields equal the equivalent point
/// mass, interior fields grow linearly with radius.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Radius in meters.
    pub radius: Scalar,
    /// Density in kg/m³.
    pub density: Scalar,
    /// Center location in meters.
    pub location: R3,
}

impl Sphere {
    /// Creates a uniform sphere with validated radius and density.
    pub fn new(radius: Scalar, density: Scalar, location: R3) -> Result<Self> {
        require_positive("radius", radius)?;
        require_positive("density", density)?;
        Ok(Self {
            radius,
            density,
            location,
        })
    }

    /// Total mass (4/3)πR³ρ.
    #[must_use]
    pub fn mass(&self) -> Scalar {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3) * self.density
    }

    /// Gravitational potential, continuous across the boundary:
    /// GM/r outside, GM(3R² - r²)/(2R³) inside.
    #[must_use]
    pub fn gravitational_potential(&self, xyz: &R3) -> Scalar {
        let r = (xyz - self.location).norm();
        let gm = GRAVITATIONAL_CONSTANT * self.mass();
        if r >= self.radius {
            gm / r
        } else {
            gm * (3.0 * self.radius.powi(2) - r * r) / (2.0 * self.radius.powi(3))
        }
    }

    /// Gravitational field: the point-mass field outside, -GM r_vec/R³
    /// inside.
    #[must_use]
    pub fn gravitational_field(&self, xyz: &R3) -> R3 {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        let gm = GRAVITATIONAL_CONSTANT * self.mass();
        if r >= self.radius {
            if r <= SINGULARITY_GUARD {
                return R3::zeros();
            }
            r_vec * (-gm / (r * r * r))
        } else {
            r_vec * (-gm / self.radius.powi(3))
        }
    }
}
