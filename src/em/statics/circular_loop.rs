use std::f64::consts::PI;

use crate::em::base::Medium;
use crate::errors::{GeoanaError, Result};
use crate::math::{R3, R3x3, Scalar};
use crate::spatial::rotation_matrix_from_normals;
use crate::special::{ellipe, ellipk};
use crate::utils::{require_finite, require_positive, require_unit};

/// Circular current loop of finite radius in an unbounded medium.
///
/// Off-axis fields use the complete elliptic integral solution; receivers
/// on the wire itself are rejected as singular.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct CircularLoopWholeSpace {
    /// Background medium (only μ enters).
    pub medium: Medium,
    /// Loop center in meters.
    pub location: R3,
    /// Unit normal of the loop plane.
    pub orientation: R3,
    /// Loop radius a in meters.
    pub radius: Scalar,
    /// Loop current I in amperes.
    pub current: Scalar,
}

/// Receivers closer than this to the wire are treated as singular.
const WIRE_GUARD: Scalar = 1.0e-10;

impl CircularLoopWholeSpace {
    /// Creates a loop source with validated geometry.
    pub fn new(
        medium: Medium,
        location: R3,
        orientation: R3,
        radius: Scalar,
        current: Scalar,
    ) -> Result<Self> {
        let orientation = require_unit("orientation", orientation)?;
        require_positive("radius", radius)?;
        require_finite("current", current)?;
        Ok(Self {
            medium,
            location,
            orientation,
            radius,
            current,
        })
    }

    /// Equivalent dipole moment I π a² of the loop.
    #[must_use]
    pub fn moment(&self) -> Scalar {
        self.current * PI * self.radius * self.radius
    }

    /// Rotations between the global frame and the loop-local frame where the
    /// loop normal is +z.
    fn frames(&self) -> Result<(R3x3, R3x3)> {
        let to_local = rotation_matrix_from_normals(&self.orientation, &R3::z())?;
        Ok((to_local, to_local.transpose()))
    }

    /// Vector potential A (purely azimuthal in the loop frame).
    pub fn vector_potential(&self, xyz: &R3) -> Result<R3> {
        let (to_local, to_global) = self.frames()?;
        let p = to_local * (xyz - self.location);
        let rho = p.x.hypot(p.y);
        let z = p.z;
        let a = self.radius;
        self.check_off_wire(rho, z)?;

        let s2 = (a + rho) * (a + rho) + z * z;
        let m = 4.0 * a * rho / s2;
        // the (1 - m/2)K - E bracket is O(m²); the closed form loses all
        // precision to cancellation near the axis, so switch to its series
        let a_phi = if m < 1.0e-3 {
            self.medium.permeability * self.current * a * a * rho * (1.0 + 0.75 * m)
                / (4.0 * s2.powf(1.5))
        } else {
            let k = m.sqrt();
            let coeff = self.medium.permeability * self.current / (PI * k) * (a / rho).sqrt();
            coeff * ((1.0 - 0.5 * m) * ellipk(m)? - ellipe(m)?)
        };

        let phi = p.y.atan2(p.x);
        let local = R3::new(-phi.sin() * a_phi, phi.cos() * a_phi, 0.0);
        Ok(to_global * local)
    }

    /// Magnetic flux density B from the elliptic-integral solution.
    pub fn magnetic_flux_density(&self, xyz: &R3) -> Result<R3> {
        let (to_local, to_global) = self.frames()?;
        let p = to_local * (xyz - self.location);
        let rho = p.x.hypot(p.y);
        let z = p.z;
        let a = self.radius;
        self.check_off_wire(rho, z)?;

        let mu_i = self.medium.permeability * self.current;
        let (b_rho, b_z) = if rho < 1.0e-12 {
            (0.0, mu_i * a * a / (2.0 * (a * a + z * z).powf(1.5)))
        } else {
            let d2 = (a - rho) * (a - rho) + z * z;
            let s2 = (a + rho) * (a + rho) + z * z;
            let s = s2.sqrt();
            let m = 4.0 * a * rho / s2;
            let k_int = ellipk(m)?;
            let e_int = ellipe(m)?;
            let b_rho = mu_i * z / (2.0 * PI * rho * s)
                * ((a * a + rho * rho + z * z) / d2 * e_int - k_int);
            let b_z = mu_i / (2.0 * PI * s)
                * (k_int + (a * a - rho * rho - z * z) / d2 * e_int);
            (b_rho, b_z)
        };

        let phi = p.y.atan2(p.x);
        let (sp, cp) = phi.sin_cos();
        let local = R3::new(cp * b_rho, sp * b_rho, b_z);
        Ok(to_global * local)
    }

    /// Magnetic field H = B/μ.
    pub fn magnetic_field(&self, xyz: &R3) -> Result<R3> {
        Ok(self.magnetic_flux_density(xyz)? / self.medium.permeability)
    }

    fn check_off_wire(&self, rho: Scalar, z: Scalar) -> Result<()> {
        let d = (rho - self.radius).hypot(z);
        if d <= WIRE_GUARD {
            return Err(GeoanaError::Singularity(rho, 0.0, z));
        }
        Ok(())
    }
}
