//! Convenience re-exports for building geophysical forward models.

pub use crate::constants::*;
pub use crate::earthquake::oksar::{wrapped_phase, OkadaFault, SatelliteLook};
pub use crate::em::base::{ElectricDipole, MagneticDipole, Medium};
pub use crate::em::fdem;
pub use crate::em::statics::{
    CircularLoopWholeSpace, DipoleHalfSpace, ElectrostaticSphere, LineCurrentWholeSpace,
    MagneticDipoleWholeSpace, MagneticPoleWholeSpace, MagnetostaticSphere, PointCurrentHalfSpace,
    PointCurrentWholeSpace, WireSegment,
};
pub use crate::em::tdem;
pub use crate::errors::{GeoanaError, Result};
pub use crate::gravity::{PointMass, Sphere};
pub use crate::io::{write_field_csv, write_scalar_csv, write_structured_vector_grid};
pub use crate::math::{phasor, C3, CScalar, R3, R3x3, Scalar};
pub use crate::spatial::{
    cartesian_to_cylindrical, cartesian_to_cylindrical_vector, cartesian_to_spherical,
    cartesian_to_spherical_vector, cylindrical_to_cartesian, cylindrical_to_cartesian_vector,
    distance, rotation_matrix_from_normals, rotate_points_from_normals, spherical_to_cartesian,
    spherical_to_cartesian_vector, vector_magnitude,
};
pub use crate::special::{ellipe, ellipk, erf, erfc};
pub use crate::utils::{linspace, logspace, ndgrid};
