use crate::errors::Result;
use crate::math::{project_onto, R3, Scalar};
use crate::utils::{require_positive, require_unit};

/// Conductive sphere in a uniform primary electric field.
///
/// Classical contrast solution: the interior field is uniform, the exterior
/// perturbation is dipolar with coefficient τ = (σ₁ - σ₀)/(σ₁ + 2σ₀).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ElectrostaticSphere {
    /// Sphere conductivity σ₁ in S/m.
    pub sigma_sphere: Scalar,
    /// Background conductivity σ₀ in S/m.
    pub sigma_background: Scalar,
    /// Sphere radius in meters.
    pub radius: Scalar,
    /// Primary field amplitude |E₀| in V/m.
    pub amplitude: Scalar,
    /// Unit direction of the primary field.
    pub orientation: R3,
    /// Sphere center in meters.
    pub location: R3,
}

impl ElectrostaticSphere {
    /// Creates a sphere scatterer with validated conductivities and radius.
    pub fn new(
        sigma_sphere: Scalar,
        sigma_background: Scalar,
        radius: Scalar,
        amplitude: Scalar,
        orientation: R3,
        location: R3,
    ) -> Result<Self> {
        require_positive("sigma_sphere", sigma_sphere)?;
        require_positive("sigma_background", sigma_background)?;
        require_positive("radius", radius)?;
        let orientation = require_unit("orientation", orientation)?;
        Ok(Self {
            sigma_sphere,
            sigma_background,
            radius,
            amplitude,
            orientation,
            location,
        })
    }

    /// Dipolar contrast coefficient τ = (σ₁ - σ₀)/(σ₁ + 2σ₀).
    #[must_use]
    pub fn contrast(&self) -> Scalar {
        (self.sigma_sphere - self.sigma_background)
            / (self.sigma_sphere + 2.0 * self.sigma_background)
    }

    /// Total electric potential.
    #[must_use]
    pub fn potential(&self, xyz: &R3) -> Scalar {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        let along = self.orientation.dot(&r_vec);
        if r < self.radius {
            -self.amplitude * (1.0 - self.contrast()) * along
        } else {
            let r3 = self.radius.powi(3) / (r * r * r);
            -self.amplitude * along * (1.0 - self.contrast() * r3)
        }
    }

    /// Total electric field.
    #[must_use]
    pub fn electric_field(&self, xyz: &R3) -> R3 {
        let e0 = self.orientation * self.amplitude;
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r < self.radius {
            e0 * (1.0 - self.contrast())
        } else {
            e0 + self.secondary_electric_field(xyz)
        }
    }

    /// Secondary (scattered) electric field, dipolar outside the sphere.
    #[must_use]
    pub fn secondary_electric_field(&self, xyz: &R3) -> R3 {
        let e0 = self.orientation * self.amplitude;
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r < self.radius {
            e0 * -self.contrast()
        } else {
            let r_hat = r_vec / r;
            let coeff = self.contrast() * self.radius.powi(3) / (r * r * r);
            (project_onto(&r_hat, &e0) * 3.0 - e0) * coeff
        }
    }

    /// Current density J = σE with the conductivity of the region `xyz`
    /// falls in.
    #[must_use]
    pub fn current_density(&self, xyz: &R3) -> R3 {
        let sigma = if (xyz - self.location).norm() < self.radius {
            self.sigma_sphere
        } else {
            self.sigma_background
        };
        self.electric_field(xyz) * sigma
    }
}

/// Permeable sphere in a uniform primary magnetic field; the μ-analogue of
/// [`ElectrostaticSphere`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct MagnetostaticSphere {
    /// Sphere permeability μ₁ in H/m.
    pub mu_sphere: Scalar,
    /// Background permeability μ₀ in H/m.
    pub mu_background: Scalar,
    /// Sphere radius in meters.
    pub radius: Scalar,
    /// Primary field amplitude |H₀| in A/m.
    pub amplitude: Scalar,
    /// Unit direction of the primary field.
    pub orientation: R3,
    /// Sphere center in meters.
    pub location: R3,
}

impl MagnetostaticSphere {
    /// Creates a permeable sphere with validated parameters.
    pub fn new(
        mu_sphere: Scalar,
        mu_background: Scalar,
        radius: Scalar,
        amplitude: Scalar,
        orientation: R3,
        location: R3,
    ) -> Result<Self> {
        require_positive("mu_sphere", mu_sphere)?;
        require_positive("mu_background", mu_background)?;
        require_positive("radius", radius)?;
        let orientation = require_unit("orientation", orientation)?;
        Ok(Self {
            mu_sphere,
            mu_background,
            radius,
            amplitude,
            orientation,
            location,
        })
    }

    /// Dipolar contrast coefficient τ = (μ₁ - μ₀)/(μ₁ + 2μ₀).
    #[must_use]
    pub fn contrast(&self) -> Scalar {
        (self.mu_sphere - self.mu_background) / (self.mu_sphere + 2.0 * self.mu_background)
    }

    /// Scalar magnetic potential.
    #[must_use]
    pub fn potential(&self, xyz: &R3) -> Scalar {
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        let along = self.orientation.dot(&r_vec);
        if r < self.radius {
            -self.amplitude * (1.0 - self.contrast()) * along
        } else {
            let r3 = self.radius.powi(3) / (r * r * r);
            -self.amplitude * along * (1.0 - self.contrast() * r3)
        }
    }

    /// Total magnetic field H.
    #[must_use]
    pub fn magnetic_field(&self, xyz: &R3) -> R3 {
        let h0 = self.orientation * self.amplitude;
        let r_vec = xyz - self.location;
        let r = r_vec.norm();
        if r < self.radius {
            h0 * (1.0 - self.contrast())
        } else {
            let r_hat = r_vec / r;
            let coeff = self.contrast() * self.radius.powi(3) / (r * r * r);
            h0 + (project_onto(&r_hat, &h0) * 3.0 - h0) * coeff
        }
    }

    /// Magnetic flux density B = μH with the permeability of the region.
    #[must_use]
    pub fn magnetic_flux_density(&self, xyz: &R3) -> R3 {
        let mu = if (xyz - self.location).norm() < self.radius {
            self.mu_sphere
        } else {
            self.mu_background
        };
        self.magnetic_field(xyz) * mu
    }
}
