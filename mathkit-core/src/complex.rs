//! Double-precision complex numbers.

use crate::scalar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Complex number with f64 components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Build from magnitude and angle (radians).
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self {
            re: r * scalar::cos(theta),
            im: r * scalar::sin(theta),
        }
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Division by zero yields non-finite components.
    #[inline]
    pub fn div(&self, other: &Self) -> Self {
        let denom = other.norm_sq();
        Self {
            re: (self.re * other.re + self.im * other.im) / denom,
            im: (self.im * other.re - self.re * other.im) / denom,
        }
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    /// (a + bi)² = (a² - b²) + 2abi
    #[inline]
    pub fn square(&self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    #[inline]
    pub fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// |z|²
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// |z|, computed without intermediate overflow.
    #[inline]
    pub fn abs(&self) -> f64 {
        scalar::hypot(self.re, self.im)
    }

    /// Principal argument in (-π, π].
    #[inline]
    pub fn arg(&self) -> f64 {
        scalar::atan2(self.im, self.re)
    }

    #[inline]
    pub fn recip(&self) -> Self {
        Complex::div(&Self::ONE, self)
    }

    pub fn exp(&self) -> Self {
        Self::from_polar(scalar::exp(self.re), self.im)
    }

    /// Principal natural logarithm.
    pub fn ln(&self) -> Self {
        Self {
            re: scalar::ln(self.abs()),
            im: self.arg(),
        }
    }

    /// Principal square root (non-negative real part).
    pub fn sqrt(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let r = self.abs();
        let re = scalar::sqrt((r + self.re) / 2.0);
        let im = scalar::sqrt((r - self.re) / 2.0);
        Self {
            re,
            im: if self.im < 0.0 { -im } else { im },
        }
    }

    /// z^p for a real exponent, via the principal branch.
    pub fn powf(&self, p: f64) -> Self {
        if self.is_zero() {
            return if p == 0.0 { Self::ONE } else { Self::ZERO };
        }
        Self::from_polar(scalar::pow(self.abs(), p), self.arg() * p)
    }

    /// z^w for a complex exponent, via the principal branch.
    pub fn powc(&self, w: &Self) -> Self {
        if self.is_zero() {
            return if w.is_zero() { Self::ONE } else { Self::ZERO };
        }
        Complex::mul(&self.ln(), w).exp()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Complex::add(&self, &rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Complex::sub(&self, &rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Complex::mul(&self, &rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Complex::div(&self, &rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
