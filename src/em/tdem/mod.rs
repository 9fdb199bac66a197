//! Time-domain regime: transient step turn-off responses in conductive
//! media (quasi-static diffusion).

mod electric_dipole;
mod half_space;
mod magnetic_dipole;

pub use electric_dipole::ElectricDipoleWholeSpace;
pub use half_space::VerticalMagneticDipoleHalfSpace;
pub use magnetic_dipole::MagneticDipoleWholeSpace;

use crate::em::base::Medium;
use crate::errors::Result;
use crate::math::Scalar;
use crate::utils::require_positive;

/// Diffusion parameter θ = sqrt(μσ / 4t).
pub fn theta(time: Scalar, medium: &Medium) -> Result<Scalar> {
    require_positive("time", time)?;
    require_positive("conductivity", medium.conductivity)?;
    Ok((medium.permeability * medium.conductivity / (4.0 * time)).sqrt())
}

/// Diffusion distance d = sqrt(2t / (μσ)), how far the transient field has
/// spread after `time` seconds.
pub fn diffusion_distance(time: Scalar, medium: &Medium) -> Result<Scalar> {
    require_positive("time", time)?;
    require_positive("conductivity", medium.conductivity)?;
    Ok((2.0 * time / (medium.permeability * medium.conductivity)).sqrt())
}

/// Time at which the peak of the transient arrives at depth `z`,
/// t = μσz²/6.
pub fn peak_time(z: Scalar, medium: &Medium) -> Result<Scalar> {
    require_positive("z", z)?;
    require_positive("conductivity", medium.conductivity)?;
    Ok(medium.permeability * medium.conductivity * z * z / 6.0)
}
