pub mod base_encoding;
pub mod complex;
pub mod constants;
pub mod error;
pub mod legendre;
pub mod morton;
pub mod points;
pub mod scalar;
pub mod spherical;

pub use base_encoding::Alphabet;
pub use complex::Complex;
pub use error::{MathError, Result};
pub use legendre::{associated_legendre, legendre, legendre_derivative, legendre_series};
pub use morton::{decode_2d, decode_3d, encode_2d, encode_3d};
pub use points::{Point2, Point3};
pub use spherical::{real_spherical_harmonic, spherical_harmonic};
