//! Numeric tolerances (internal).
//!
//! Policy
//! - Fixed constants, not runtime configuration. Tests and benches rely on
//!   their exact values, so changing one means re-deriving the cumulative
//!   error tolerances in `crate::tests`.

use crate::scalar::Scalar;

/// `|1 - |v|²|` below which `normalize` uses the first-order step
/// `v *= 2 / (1 + |v|²)` instead of a square root.
pub const NORMALIZE_FAST_PATH_EPS: f64 = 2.107342e-08;

/// `180 / π` in the scalar type.
#[inline]
pub(crate) fn degrees_per_radian<S: Scalar>() -> S {
    S::narrow(180.0) / S::PI()
}

/// `π / 180` in the scalar type.
#[inline]
pub(crate) fn radians_per_degree<S: Scalar>() -> S {
    S::PI() / S::narrow(180.0)
}
