//! Planar geometry primitives: vectors, points and angles.
//!
//! - `Vector2`: displacement arithmetic, normalization, rotation.
//! - `Point2`: affine positions (`point - point = vector`).
//! - `Angle`: rotation stored as a unit vector `(cos θ, sin θ)`; composition
//!   stays on the unit circle instead of accumulating degrees.
//!
//! All types are generic over `Scalar` (`f32` or `f64`) and are plain `Copy`
//! values. No operation fails: degenerate input follows IEEE-754 (NaN/inf)
//! and the `try_*` variants report it as `None`.

pub mod angle;
pub mod cfg;
pub mod interop;
pub mod point;
pub mod rand;
pub mod scalar;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::{cos, sin, Angle};
pub use point::Point2;
pub use scalar::Scalar;
pub use vector::{dot, Vector2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{cos, sin, Angle};
    pub use crate::point::Point2;
    pub use crate::rand::{random_unit_vector, ReplayToken};
    pub use crate::scalar::Scalar;
    pub use crate::vector::{dot, Vector2};
}
