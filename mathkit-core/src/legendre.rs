//! Legendre polynomials.
//!
//! Ordinary polynomials P_n use Bonnet's recurrence; associated functions
//! P_l^m use the standard upward recurrence in l from the closed-form P_m^m.
//! Associated functions include the Condon–Shortley phase (-1)^m.

use crate::error::{MathError, Result};
use crate::scalar;

/// P_n(x) via (k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}.
pub fn legendre(n: u32, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut p_prev = 1.0;
            let mut p = x;
            for k in 1..n {
                let k = k as f64;
                let next = ((2.0 * k + 1.0) * x * p - k * p_prev) / (k + 1.0);
                p_prev = p;
                p = next;
            }
            p
        }
    }
}

/// P_0(x) ..= P_n(x) in one pass.
pub fn legendre_series(n: u32, x: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(n as usize + 1);
    values.push(1.0);
    if n == 0 {
        return values;
    }
    values.push(x);
    for k in 1..n as usize {
        let kf = k as f64;
        let next = ((2.0 * kf + 1.0) * x * values[k] - kf * values[k - 1]) / (kf + 1.0);
        values.push(next);
    }
    values
}

/// P'_n(x).
///
/// Uses (x² - 1) P'_n = n (x P_n - P_{n-1}) in the interior; at x = ±1 the
/// expression is 0/0 and the closed form n(n+1)/2 · (±1)^(n+1) is used.
pub fn legendre_derivative(n: u32, x: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    if x == 1.0 || x == -1.0 {
        let magnitude = nf * (nf + 1.0) / 2.0;
        return if x < 0.0 && n % 2 == 0 {
            -magnitude
        } else {
            magnitude
        };
    }
    nf * (x * legendre(n, x) - legendre(n - 1, x)) / (x * x - 1.0)
}

/// Associated Legendre function P_l^m(x) for 0 ≤ m ≤ l and |x| ≤ 1.
pub fn associated_legendre(l: u32, m: u32, x: f64) -> Result<f64> {
    if m > l {
        return Err(MathError::InvalidArgument(format!(
            "order m = {} exceeds degree l = {}",
            m, l
        )));
    }
    if !(-1.0..=1.0).contains(&x) {
        return Err(MathError::InvalidArgument(format!(
            "x = {} outside [-1, 1]",
            x
        )));
    }

    // P_m^m = (-1)^m (2m-1)!! (1-x²)^(m/2)
    let mut pmm = 1.0;
    if m > 0 {
        let somx2 = scalar::sqrt((1.0 - x) * (1.0 + x));
        let mut fact = 1.0;
        for _ in 0..m {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == m {
        return Ok(pmm);
    }

    // P_{m+1}^m = x (2m+1) P_m^m
    let mut pmmp1 = x * (2 * m + 1) as f64 * pmm;
    if l == m + 1 {
        return Ok(pmmp1);
    }

    // (l-m) P_l^m = x (2l-1) P_{l-1}^m - (l+m-1) P_{l-2}^m
    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = (x * (2 * ll - 1) as f64 * pmmp1 - (ll + m - 1) as f64 * pmm) / (ll - m) as f64;
        pmm = pmmp1;
        pmmp1 = pll;
    }
    Ok(pll)
}
