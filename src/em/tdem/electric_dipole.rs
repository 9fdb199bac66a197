use std::f64::consts::PI;

use super::theta;
use crate::em::base::{ElectricDipole, Medium};
use crate::errors::Result;
use crate::math::{project_onto, R3, Scalar};
use crate::special::erf;

const ROOT_PI: Scalar = 1.772_453_850_905_516;

/// Transient electric current dipole in a conductive whole space.
///
/// Responses are for step turn-off of the source current at t = 0: the
/// t -> 0+ limit equals the DC solution, and the fields then diffuse away.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ElectricDipoleWholeSpace {
    /// Background medium; σ must be positive for diffusion.
    pub medium: Medium,
    /// Source description.
    pub dipole: ElectricDipole,
}

impl ElectricDipoleWholeSpace {
    /// Creates a transient dipole source in a conductive medium.
    pub fn new(medium: Medium, dipole: ElectricDipole) -> Result<Self> {
        crate::utils::require_positive("conductivity", medium.conductivity)?;
        Ok(Self { medium, dipole })
    }

    /// Electric field at `xyz` a time `t` after turn-off.
    ///
    /// Receivers within 1e-12 m of the source return zeros.
    pub fn electric_field(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        let th = theta(t, &self.medium)?;
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return Ok(R3::zeros());
        }
        let r_hat = r_vec / r;
        let d_hat = self.dipole.orientation;
        let u = th * r;
        let gauss = (-u * u).exp();
        let front = self.dipole.moment() / (4.0 * PI * self.medium.conductivity * r * r * r);
        let symmetric = 3.0 * erf(u) - (4.0 * u.powi(3) + 6.0 * u) / ROOT_PI * gauss;
        let oriented = (4.0 * u.powi(3) + 2.0 * u) / ROOT_PI * gauss - erf(u);
        Ok((project_onto(&r_hat, &d_hat) * symmetric + d_hat * oriented) * front)
    }

    /// Current density J = σE.
    pub fn current_density(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        Ok(self.electric_field(xyz, t)? * self.medium.conductivity)
    }

    /// Magnetic field H = Ids/(4πr²) (d̂ × r̂) [erf(u) - 2u/√π e^{-u²}].
    pub fn magnetic_field(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        let th = theta(t, &self.medium)?;
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return Ok(R3::zeros());
        }
        let r_hat = r_vec / r;
        let u = th * r;
        let profile = erf(u) - 2.0 * u / ROOT_PI * (-u * u).exp();
        let front = self.dipole.moment() / (4.0 * PI * r * r);
        Ok(self.dipole.orientation.cross(&r_hat) * (front * profile))
    }

    /// Time derivative dH/dt, from d/du[erf(u) - 2u/√π e^{-u²}] = 4u²e^{-u²}/√π
    /// and du/dt = -u/2t.
    pub fn magnetic_field_time_derivative(&self, xyz: &R3, t: Scalar) -> Result<R3> {
        let th = theta(t, &self.medium)?;
        let r_vec = xyz - self.dipole.location;
        let r = r_vec.norm();
        if r <= 1.0e-12 {
            return Ok(R3::zeros());
        }
        let r_hat = r_vec / r;
        let u = th * r;
        let rate = -2.0 * u.powi(3) / (ROOT_PI * t) * (-u * u).exp();
        let front = self.dipole.moment() / (4.0 * PI * r * r);
        Ok(self.dipole.orientation.cross(&r_hat) * (front * rate))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn source() -> ElectricDipoleWholeSpace {
        ElectricDipoleWholeSpace::new(
            Medium::whole_space(1.0).unwrap(),
            ElectricDipole::new(R3::zeros(), R3::x(), 1.0, 1.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn early_time_equals_dc_solution() {
        let src = source();
        let p = R3::new(1.0, 2.0, -0.5);
        let e = src.electric_field(&p, 1.0e-9).unwrap();
        let r = p.norm();
        let r_hat = p / r;
        let expected = (r_hat * (3.0 * r_hat.dot(&R3::x())) - R3::x())
            * (1.0 / (4.0 * PI * 1.0 * r.powi(3)));
        assert_relative_eq!((e - expected).norm(), 0.0, epsilon = 1.0e-6 * expected.norm());
    }

    #[test]
    fn late_time_electric_field_is_dipole_aligned_and_decays_as_t_to_3_halves() {
        let src = source();
        let p = R3::new(0.0, 10.0, 0.0);
        let t1 = 1.0;
        let t2 = 2.0;
        let e1 = src.electric_field(&p, t1).unwrap();
        let e2 = src.electric_field(&p, t2).unwrap();
        // aligned with the dipole, not with r̂
        assert!(e1.x.abs() > 1.0e3 * e1.y.abs());
        assert_relative_eq!(
            e1.norm() / e2.norm(),
            (t2 / t1).powf(1.5),
            max_relative = 1.0e-2
        );
    }

    #[test]
    fn magnetic_field_derivative_matches_finite_difference() {
        let src = source();
        let p = R3::new(3.0, 1.0, 2.0);
        let t = 5.0e-3;
        let dt = 1.0e-7;
        let fd = (src.magnetic_field(&p, t + dt).unwrap()
            - src.magnetic_field(&p, t - dt).unwrap())
            / (2.0 * dt);
        let analytic = src.magnetic_field_time_derivative(&p, t).unwrap();
        assert_relative_eq!((fd - analytic).norm(), 0.0, epsilon = 1.0e-5 * analytic.norm());
    }
}
