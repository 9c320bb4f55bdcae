//! Scalar bound shared by every type in the crate.
//!
//! Trig is always evaluated in `f64` and narrowed back, so the scalar only
//! needs explicit widen/narrow conversions on top of `num_traits::Float`.

use std::fmt::{Debug, Display};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{Float, FloatConst};

/// Floating-point component type (`f32` or `f64`).
pub trait Scalar:
    Float
    + FloatConst
    + Debug
    + Display
    + Default
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
    + Send
    + Sync
    + 'static
{
    /// Lossless conversion to `f64`.
    fn widen(self) -> f64;
    /// Conversion from `f64`, rounding to nearest when `Self` is narrower.
    fn narrow(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
    #[inline]
    fn narrow(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }
    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }
}
