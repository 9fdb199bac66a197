//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Matrix3, Vector3};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;
/// Convenient alias for three-by-three real matrices.
pub type R3x3 = Matrix3<Scalar>;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;
/// Convenient alias for three-dimensional complex vectors.
pub type C3 = Vector3<CScalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Lifts a real vector into its complex representation.
#[must_use]
pub fn complexify(vector: &R3) -> C3 {
    vector.map(|c| CScalar::new(c, 0.0))
}

/// Outer-product projector r̂ ⊗ r̂ applied to `v`, i.e. `r_hat * (r_hat · v)`.
#[must_use]
pub fn project_onto(r_hat: &R3, v: &R3) -> R3 {
    r_hat * r_hat.dot(v)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn phasor_lies_on_unit_circle() {
        let p = phasor(0.3);
        assert_relative_eq!(p.norm(), 1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn projector_recovers_parallel_component() {
        let r_hat = R3::new(0.0, 0.0, 1.0);
        let v = R3::new(1.0, 2.0, 3.0);
        let p = project_onto(&r_hat, &v);
        assert_relative_eq!(p.x, 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(p.z, 3.0, epsilon = 1.0e-15);
    }
}
