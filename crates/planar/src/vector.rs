//! 2D displacement vectors.
//!
//! - `Vector2`: component-wise arithmetic, scaling, rotation by an `Angle`.
//! - `dot`: free-standing inner product.
//!
//! Normalization has two branches (see `Vector2::normalize`); the fast one is
//! what keeps repeated angle composition on the unit circle cheaply.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::angle::Angle;
use crate::cfg::NORMALIZE_FAST_PATH_EPS;
use crate::scalar::Scalar;

/// Displacement in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<S> {
    pub dx: S,
    pub dy: S,
}

/// Inner product `a.dx * b.dx + a.dy * b.dy`.
#[inline]
pub fn dot<S: Scalar>(a: Vector2<S>, b: Vector2<S>) -> S {
    a.dx * b.dx + a.dy * b.dy
}

impl<S: Scalar> Vector2<S> {
    #[inline]
    pub fn new(dx: S, dy: S) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero())
    }

    /// `(-1, 0)`
    #[inline]
    pub fn left() -> Self {
        Self::new(-S::one(), S::zero())
    }

    /// `(1, 0)`
    #[inline]
    pub fn right() -> Self {
        Self::new(S::one(), S::zero())
    }

    /// `(0, 1)`
    #[inline]
    pub fn up() -> Self {
        Self::new(S::zero(), S::one())
    }

    /// `(0, -1)`
    #[inline]
    pub fn down() -> Self {
        Self::new(S::zero(), -S::one())
    }

    #[inline]
    pub fn length_squared(&self) -> S {
        dot(*self, *self)
    }

    #[inline]
    pub fn length(&self) -> S {
        self.length_squared().sqrt()
    }

    /// 90° counterclockwise turn: `(-dy, dx)`. Length is preserved.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.dy, self.dx)
    }

    /// Rescale to unit length in place.
    ///
    /// Near-unit input (`|1 - |v|²| < NORMALIZE_FAST_PATH_EPS`) takes the
    /// first-order step `v *= 2 / (1 + |v|²)`; everything else is scaled by
    /// `1 / sqrt(|v|²)`. Both agree to working precision inside the fast-path
    /// window.
    ///
    /// The zero vector yields NaN components. Use `try_normalized` to detect it.
    pub fn normalize(&mut self) {
        let qmagsq = self.length_squared();
        if (S::one() - qmagsq).abs() < S::narrow(NORMALIZE_FAST_PATH_EPS) {
            *self *= S::narrow(2.0) / (S::one() + qmagsq);
        } else {
            if qmagsq == S::zero() || !qmagsq.is_finite() {
                tracing::trace!(dx = ?self.dx, dy = ?self.dy, "normalizing degenerate vector");
            }
            *self *= S::one() / qmagsq.sqrt();
        }
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }

    /// `normalized()`, or `None` when the length is zero or not finite.
    #[inline]
    pub fn try_normalized(&self) -> Option<Self> {
        let qmagsq = self.length_squared();
        if !qmagsq.is_finite() || qmagsq <= S::zero() {
            return None;
        }
        Some(self.normalized())
    }

    /// Rotate counterclockwise by `angle` (complex multiplication by its unit vector).
    #[inline]
    pub fn rotated(&self, angle: Angle<S>) -> Self {
        let u = angle.unit_vector();
        Self::new(
            self.dx * u.dx - self.dy * u.dy,
            self.dy * u.dx + self.dx * u.dy,
        )
    }

    #[inline]
    pub fn rotate(&mut self, angle: Angle<S>) {
        *self = self.rotated(angle);
    }

    /// Signed angle from `self` to `that`, counterclockwise positive, in `(-180°, 180°]`.
    ///
    /// Built from the projections of `that` onto `self` and onto its
    /// perpendicular, so no `atan2` is evaluated here.
    #[inline]
    pub fn angle_to(&self, that: Vector2<S>) -> Angle<S> {
        Angle::from_vector(Self::new(
            dot(that, *self),
            dot(that, self.perpendicular()),
        ))
    }
}

impl<S: Scalar> fmt::Display for Vector2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}, {:?}>", self.dx, self.dy)
    }
}

impl<S: Scalar> Add for Vector2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl<S: Scalar> AddAssign for Vector2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.dx = self.dx + rhs.dx;
        self.dy = self.dy + rhs.dy;
    }
}

impl<S: Scalar> Sub for Vector2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl<S: Scalar> SubAssign for Vector2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.dx = self.dx - rhs.dx;
        self.dy = self.dy - rhs.dy;
    }
}

impl<S: Scalar> Neg for Vector2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl<S: Scalar> Mul<S> for Vector2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl<S: Scalar> MulAssign<S> for Vector2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.dx = self.dx * rhs;
        self.dy = self.dy * rhs;
    }
}

impl<S: Scalar> Div<S> for Vector2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.dx / rhs, self.dy / rhs)
    }
}

impl<S: Scalar> DivAssign<S> for Vector2<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        self.dx = self.dx / rhs;
        self.dy = self.dy / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;
            #[inline]
            fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs * self
            }
        }
    )*};
}
impl_scalar_lhs_mul!(f32, f64);

impl<S: Scalar> Sum for Vector2<S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<S: Scalar> From<(S, S)> for Vector2<S> {
    #[inline]
    fn from((dx, dy): (S, S)) -> Self {
        Self::new(dx, dy)
    }
}

impl<S: Scalar> From<[S; 2]> for Vector2<S> {
    #[inline]
    fn from([dx, dy]: [S; 2]) -> Self {
        Self::new(dx, dy)
    }
}

impl<S: Scalar> AbsDiffEq for Vector2<S> {
    type Epsilon = S;
    fn default_epsilon() -> S {
        S::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        self.dx.abs_diff_eq(&other.dx, epsilon) && self.dy.abs_diff_eq(&other.dy, epsilon)
    }
}

impl<S: Scalar> RelativeEq for Vector2<S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        self.dx.relative_eq(&other.dx, epsilon, max_relative)
            && self.dy.relative_eq(&other.dy, epsilon, max_relative)
    }
}

impl<S: Scalar> UlpsEq for Vector2<S> {
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }
    fn ulps_eq(&self, other: &Self, epsilon: S, max_ulps: u32) -> bool {
        self.dx.ulps_eq(&other.dx, epsilon, max_ulps) && self.dy.ulps_eq(&other.dy, epsilon, max_ulps)
    }
}
