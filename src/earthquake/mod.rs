//! Earthquake deformation models.

pub mod oksar;

pub use oksar::{wrapped_phase, OkadaFault, SatelliteLook};
