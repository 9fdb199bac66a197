#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical primitives (vectors, matrices, phasors).
pub mod math;
/// Special functions backing the closed-form solutions.
pub mod special;
/// Sampling grids and parameter-validation helpers.
pub mod utils;
/// Coordinate transforms and rigid rotations.
pub mod spatial;
/// Electromagnetic solvers: base abstractions plus static,
/// frequency-domain, and time-domain regimes.
pub mod em;
/// Earthquake deformation models (rectangular dislocations).
pub mod earthquake;
/// Analytical gravity solutions.
pub mod gravity;
/// Export helpers for visualization tooling.
pub mod io;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
