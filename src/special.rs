//! Special functions required by the closed-form field solutions.
//!
//! Only the handful of functions the analytical kernels actually need are
//! implemented: the error function family for the transient (diffusive)
//! responses and the complete elliptic integrals for circular-loop fields.

use crate::errors::{GeoanaError, Result};
use crate::math::Scalar;

const ROOT_PI: Scalar = 1.772_453_850_905_516;

/// Error function erf(x), accurate to double precision.
///
/// The diffusion kernels difference erf against its own leading series
/// terms, so a low-order rational approximation is not good enough here.
/// Small arguments use the confluent (all-positive) power series, large
/// arguments the erfc continued fraction, and the two meet at x = 3 well
/// inside both regions of fast convergence.
#[must_use]
pub fn erf(x: Scalar) -> Scalar {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    if x >= 6.0 {
        // erfc(6) ~ 2e-17, below double-precision resolution of 1 - erfc
        return sign;
    }
    if x > 3.0 {
        // backward-evaluated continued fraction for erfc
        let mut f = x;
        for n in (1..=60).rev() {
            f = x + (n as Scalar / 2.0) / f;
        }
        let erfc = (-x * x).exp() / (ROOT_PI * f);
        return sign * (1.0 - erfc);
    }
    // erf(x) = 2x e^{-x²}/√π · Σ (2x²)ⁿ / (2n+1)!!
    let tx = 2.0 * x * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut n = 0u32;
    while term > 1.0e-18 * sum && n < 200 {
        n += 1;
        term *= tx / (2 * n + 1) as Scalar;
        sum += term;
    }
    sign * 2.0 * x * (-x * x).exp() / ROOT_PI * sum
}

/// Complementary error function erfc(x) = 1 - erf(x).
#[must_use]
pub fn erfc(x: Scalar) -> Scalar {
    1.0 - erf(x)
}

/// Arithmetic-geometric mean iteration shared by the elliptic integrals.
///
/// Returns `(agm, sum)` where `sum` accumulates `2^(n-1) * c_n^2` for the
/// second-kind integral. Converges quadratically; 32 iterations is far more
/// than double precision ever needs.
fn agm_sequence(m: Scalar) -> (Scalar, Scalar) {
    let mut a = 1.0_f64;
    let mut b = (1.0 - m).sqrt();
    let mut c = m.sqrt();
    let mut sum = 0.5 * c * c;
    let mut pow2 = 1.0;
    for _ in 0..32 {
        if (a - b).abs() <= Scalar::EPSILON * a {
            break;
        }
        let an = 0.5 * (a + b);
        c = 0.5 * (a - b);
        b = (a * b).sqrt();
        a = an;
        sum += pow2 * c * c;
        pow2 *= 2.0;
    }
    (a, sum)
}

/// Complete elliptic integral of the first kind K(m), parameter convention
/// (`m = k²`). Defined for 0 <= m < 1; K diverges logarithmically as m -> 1.
pub fn ellipk(m: Scalar) -> Result<Scalar> {
    if !(0.0..1.0).contains(&m) {
        return Err(GeoanaError::Domain(format!(
            "ellipk requires 0 <= m < 1, got {m}"
        )));
    }
    let (agm, _) = agm_sequence(m);
    Ok(std::f64::consts::FRAC_PI_2 / agm)
}

/// Complete elliptic integral of the second kind E(m), parameter convention.
/// Defined for 0 <= m <= 1 with E(1) = 1.
pub fn ellipe(m: Scalar) -> Result<Scalar> {
    if !(0.0..=1.0).contains(&m) {
        return Err(GeoanaError::Domain(format!(
            "ellipe requires 0 <= m <= 1, got {m}"
        )));
    }
    if m == 1.0 {
        return Ok(1.0);
    }
    let (agm, sum) = agm_sequence(m);
    let k = std::f64::consts::FRAC_PI_2 / agm;
    Ok(k * (1.0 - sum))
}
