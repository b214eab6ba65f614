//! Mathematical constants.

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;
pub const E: f64 = std::f64::consts::E;
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
pub const LN_2: f64 = std::f64::consts::LN_2;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// 1 / (4π), the normalization of the l = 0 spherical harmonic squared.
pub const INV_FOUR_PI: f64 = 1.0 / (4.0 * PI);

/// Default tolerance for approximate float comparison.
pub const EPSILON: f64 = 1e-12;
