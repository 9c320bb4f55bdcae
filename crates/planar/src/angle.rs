//! Rotations stored as unit vectors `(cos θ, sin θ)`.
//!
//! Purpose
//! - Compose rotations without radian bookkeeping: `+`/`-` rotate the stored
//!   unit vector and renormalize, so wrap-around never has to be handled.
//! - Degrees and radians are derived on demand via `atan2` and always lie in
//!   `(-180°, 180°]`.
//!
//! Invariant
//! - The stored vector has unit length to working precision after every
//!   constructor and every operator.
//!
//! Precision
//! - Trig (`cos`, `sin`, `atan2`) is evaluated in `f64` and narrowed to the
//!   scalar type, so `Angle<f32>` matches an `f64` reference rounded once.
//! - Scalar multiplication goes through radians and back, unlike `+`/`-`.
//!   Its error profile therefore differs from composition.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::cfg::{degrees_per_radian, radians_per_degree};
use crate::scalar::Scalar;
use crate::vector::Vector2;

/// Planar rotation. Equality is exact on the stored unit vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle<S> {
    vector: Vector2<S>,
}

/// Cosine of `angle`; reads the stored component, no trig call.
#[inline]
pub fn cos<S: Scalar>(angle: Angle<S>) -> S {
    angle.vector.dx
}

/// Sine of `angle`; reads the stored component, no trig call.
#[inline]
pub fn sin<S: Scalar>(angle: Angle<S>) -> S {
    angle.vector.dy
}

impl<S: Scalar> Angle<S> {
    /// Wrap an already-unit vector.
    #[inline]
    fn from_unit(vector: Vector2<S>) -> Self {
        Self { vector }
    }

    /// 0°.
    #[inline]
    pub fn zero() -> Self {
        Self::from_unit(Vector2::right())
    }

    pub fn from_radians(radians: S) -> Self {
        let r = radians.widen();
        Self::from_unit(Vector2::new(S::narrow(r.cos()), S::narrow(r.sin())))
    }

    #[inline]
    pub fn from_degrees(degrees: S) -> Self {
        Self::from_radians(degrees * radians_per_degree::<S>())
    }

    /// Direction of `vector`; any non-zero length is accepted.
    ///
    /// The zero vector yields NaN components (see `Vector2::normalize`).
    #[inline]
    pub fn from_vector(vector: Vector2<S>) -> Self {
        Self::from_unit(vector.normalized())
    }

    /// Direction of `vector`, or `None` for a zero or non-finite vector.
    #[inline]
    pub fn try_from_vector(vector: Vector2<S>) -> Option<Self> {
        vector.try_normalized().map(Self::from_unit)
    }

    /// Stored `(cos θ, sin θ)`.
    #[inline]
    pub fn unit_vector(&self) -> Vector2<S> {
        self.vector
    }

    /// `atan2(sin, cos)` in `(-π, π]`.
    #[inline]
    pub fn radians(&self) -> S {
        S::narrow(self.vector.dy.widen().atan2(self.vector.dx.widen()))
    }

    /// `radians() * 180 / π` in `(-180, 180]`.
    #[inline]
    pub fn degrees(&self) -> S {
        self.radians() * degrees_per_radian::<S>()
    }
}

impl<S: Scalar> Default for Angle<S> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Bare scalars are degrees.
impl<S: Scalar> From<S> for Angle<S> {
    #[inline]
    fn from(degrees: S) -> Self {
        Self::from_degrees(degrees)
    }
}

impl<S: Scalar> From<Vector2<S>> for Angle<S> {
    #[inline]
    fn from(vector: Vector2<S>) -> Self {
        Self::from_vector(vector)
    }
}

impl<S: Scalar> From<Angle<S>> for Vector2<S> {
    #[inline]
    fn from(angle: Angle<S>) -> Self {
        angle.vector
    }
}

impl<S: Scalar> fmt::Display for Angle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}\u{ba}", self.degrees())
    }
}

impl<S: Scalar> Add for Angle<S> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<S: Scalar> AddAssign for Angle<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.vector.rotate(rhs);
        self.vector.normalize();
    }
}

impl<S: Scalar> Sub for Angle<S> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<S: Scalar> SubAssign for Angle<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.vector.rotate(-rhs);
        self.vector.normalize();
    }
}

impl<S: Scalar> Neg for Angle<S> {
    type Output = Self;
    /// Reflect across the x axis; no trig.
    #[inline]
    fn neg(self) -> Self {
        Self::from_unit(Vector2::new(self.vector.dx, -self.vector.dy))
    }
}

impl<S: Scalar> Mul<S> for Angle<S> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: S) -> Self {
        self *= rhs;
        self
    }
}

impl<S: Scalar> MulAssign<S> for Angle<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        // TODO: raise (cos + i sin) to the power `rhs` directly instead of the
        // atan2 -> cos/sin round trip; re-derive the test tolerances when doing so.
        *self = Self::from_radians(self.radians() * rhs);
    }
}

// Tolerances are in degrees. No wrap-around: -180° and 180° are far apart.
impl<S: Scalar> AbsDiffEq for Angle<S> {
    type Epsilon = S;
    fn default_epsilon() -> S {
        S::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        self.degrees().abs_diff_eq(&other.degrees(), epsilon)
    }
}

impl<S: Scalar> RelativeEq for Angle<S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        self.degrees().relative_eq(&other.degrees(), epsilon, max_relative)
    }
}

impl<S: Scalar> UlpsEq for Angle<S> {
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }
    fn ulps_eq(&self, other: &Self, epsilon: S, max_ulps: u32) -> bool {
        self.degrees().ulps_eq(&other.degrees(), epsilon, max_ulps)
    }
}
