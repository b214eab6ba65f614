//! Spherical harmonics Y_l^m(θ, φ).
//!
//! θ is the polar angle measured from +z, φ the azimuth in the xy-plane.
//! The complex harmonics are orthonormal over the unit sphere and carry the
//! Condon–Shortley phase through [`associated_legendre`].

use crate::complex::Complex;
use crate::constants::{INV_FOUR_PI, SQRT_2};
use crate::error::{MathError, Result};
use crate::legendre::associated_legendre;
use crate::scalar;

fn check_order(l: u32, m: i32) -> Result<u32> {
    let abs_m = m.unsigned_abs();
    if abs_m > l {
        return Err(MathError::InvalidArgument(format!(
            "|m| = {} exceeds degree l = {}",
            abs_m, l
        )));
    }
    Ok(abs_m)
}

/// sqrt((2l+1)/(4π) · (l-|m|)!/(l+|m|)!)
///
/// The factorial ratio is accumulated as a product so large degrees do not
/// overflow before the division.
pub fn normalization(l: u32, m: i32) -> f64 {
    let abs_m = m.unsigned_abs().min(l);
    let mut ratio = 1.0;
    for k in (l - abs_m + 1)..=(l + abs_m) {
        ratio /= k as f64;
    }
    scalar::sqrt((2 * l + 1) as f64 * INV_FOUR_PI * ratio)
}

/// Complex spherical harmonic Y_l^m(θ, φ) for |m| ≤ l.
pub fn spherical_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Result<Complex> {
    let abs_m = check_order(l, m)?;
    let p = associated_legendre(l, abs_m, scalar::cos(theta))?;
    let positive = Complex::from_polar(normalization(l, m) * p, abs_m as f64 * phi);
    if m >= 0 {
        return Ok(positive);
    }
    // Y_l^{-m} = (-1)^m conj(Y_l^m)
    let phase = if abs_m % 2 == 0 { 1.0 } else { -1.0 };
    Ok(positive.conj().scale(phase))
}

/// Real spherical harmonic in the usual tesseral basis.
///
/// m > 0 selects the cosine terms, m < 0 the sine terms; the Condon–Shortley
/// phase is removed so that e.g. Y_{1,1} is proportional to +x.
pub fn real_spherical_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Result<f64> {
    let abs_m = check_order(l, m)?;
    let x = scalar::cos(theta);
    let p = associated_legendre(l, abs_m, x)?;
    let k = normalization(l, m);
    let cs_phase = if abs_m % 2 == 0 { 1.0 } else { -1.0 };
    let value = match m {
        0 => k * p,
        m if m > 0 => SQRT_2 * k * cs_phase * p * scalar::cos(abs_m as f64 * phi),
        _ => SQRT_2 * k * cs_phase * p * scalar::sin(abs_m as f64 * phi),
    };
    Ok(value)
}
