//! Coordinate transforms and rigid rotations shared by the solvers.
//!
//! Conventions: cylindrical triples are `(rho, phi, z)` with `phi` the
//! azimuth measured from +x; spherical triples are `(r, theta, phi)` with
//! `theta` the polar angle from +z.

use nalgebra::{Rotation3, Unit};

use crate::errors::Result;
use crate::math::{R3, R3x3, Scalar};
use crate::utils::require_unit;

/// Converts a Cartesian point to cylindrical `(rho, phi, z)`.
#[must_use]
pub fn cartesian_to_cylindrical(point: &R3) -> R3 {
    R3::new(point.x.hypot(point.y), point.y.atan2(point.x), point.z)
}

/// Converts a cylindrical point `(rho, phi, z)` to Cartesian.
#[must_use]
pub fn cylindrical_to_cartesian(point: &R3) -> R3 {
    let (rho, phi, z) = (point.x, point.y, point.z);
    R3::new(rho * phi.cos(), rho * phi.sin(), z)
}

/// Re-expresses a Cartesian vector in the cylindrical basis attached to
/// `location`, returning `(v_rho, v_phi, v_z)` components.
#[must_use]
pub fn cartesian_to_cylindrical_vector(location: &R3, vector: &R3) -> R3 {
    let phi = location.y.atan2(location.x);
    let (s, c) = phi.sin_cos();
    R3::new(
        c * vector.x + s * vector.y,
        -s * vector.x + c * vector.y,
        vector.z,
    )
}

/// Re-expresses a cylindrical-basis vector at `location` in Cartesian
/// components.
#[must_use]
pub fn cylindrical_to_cartesian_vector(location: &R3, vector: &R3) -> R3 {
    let phi = location.y.atan2(location.x);
    let (s, c) = phi.sin_cos();
    R3::new(
        c * vector.x - s * vector.y,
        s * vector.x + c * vector.y,
        vector.z,
    )
}

/// Converts a Cartesian point to spherical `(r, theta, phi)`.
#[must_use]
pub fn cartesian_to_spherical(point: &R3) -> R3 {
    let r = point.norm();
    if r == 0.0 {
        return R3::zeros();
    }
    R3::new(r, (point.z / r).acos(), point.y.atan2(point.x))
}

/// Converts a spherical point `(r, theta, phi)` to Cartesian.
#[must_use]
pub fn spherical_to_cartesian(point: &R3) -> R3 {
    let (r, theta, phi) = (point.x, point.y, point.z);
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    R3::new(r * st * cp, r * st * sp, r * ct)
}

/// Re-expresses a Cartesian vector in the spherical basis attached to
/// `location`, returning `(v_r, v_theta, v_phi)` components.
#[must_use]
pub fn cartesian_to_spherical_vector(location: &R3, vector: &R3) -> R3 {
    let sph = cartesian_to_spherical(location);
    let (st, ct) = sph.y.sin_cos();
    let (sp, cp) = sph.z.sin_cos();
    R3::new(
        st * cp * vector.x + st * sp * vector.y + ct * vector.z,
        ct * cp * vector.x + ct * sp * vector.y - st * vector.z,
        -sp * vector.x + cp * vector.y,
    )
}

/// Re-expresses a spherical-basis vector at `location` in Cartesian
/// components.
#[must_use]
pub fn spherical_to_cartesian_vector(location: &R3, vector: &R3) -> R3 {
    let sph = cartesian_to_spherical(location);
    let (st, ct) = sph.y.sin_cos();
    let (sp, cp) = sph.z.sin_cos();
    R3::new(
        st * cp * vector.x + ct * cp * vector.y - sp * vector.z,
        st * sp * vector.x + ct * sp * vector.y + cp * vector.z,
        ct * vector.x - st * vector.y,
    )
}

/// Euclidean distances from `origin` to each point.
#[must_use]
pub fn distance(points: &[R3], origin: &R3) -> Vec<Scalar> {
    points.iter().map(|p| (p - origin).norm()).collect()
}

/// Magnitude of each vector in a field sample.
#[must_use]
pub fn vector_magnitude(vectors: &[R3]) -> Vec<Scalar> {
    vectors.iter().map(nalgebra::Vector3::norm).collect()
}

/// Proper rotation matrix taking unit vector `a` onto unit vector `b`.
///
/// Inputs are normalized first. The antiparallel case has no unique axis;
/// any axis perpendicular to `a` gives a valid half-turn and one is chosen
/// deterministically.
pub fn rotation_matrix_from_normals(a: &R3, b: &R3) -> Result<R3x3> {
    let a = require_unit("a", *a)?;
    let b = require_unit("b", *b)?;
    if let Some(rot) = Rotation3::rotation_between(&a, &b) {
        return Ok(*rot.matrix());
    }
    // rotation_between returns None only for antiparallel inputs
    let perp = if a.x.abs() < 0.9 {
        a.cross(&R3::x())
    } else {
        a.cross(&R3::y())
    };
    let axis = Unit::new_normalize(perp);
    Ok(*Rotation3::from_axis_angle(&axis, std::f64::consts::PI).matrix())
}

/// Rotates a cloud of points (or vectors) with the rotation that takes
/// normal `a` onto normal `b`.
pub fn rotate_points_from_normals(points: &[R3], a: &R3, b: &R3) -> Result<Vec<R3>> {
    let rot = rotation_matrix_from_normals(a, b)?;
    Ok(points.iter().map(|p| rot * p).collect())
}
