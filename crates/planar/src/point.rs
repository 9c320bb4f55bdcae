//! Affine positions.
//!
//! Only the affine algebra is defined: `point - point = vector`,
//! `point ± vector = point`. Adding two points or scaling a point does not
//! compile.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::scalar::Scalar;
use crate::vector::Vector2;

/// Position in the plane, stored as its offset from the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2<S> {
    vector: Vector2<S>,
}

impl<S: Scalar> Point2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self {
            vector: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self {
            vector: Vector2::zero(),
        }
    }

    #[inline]
    pub fn x(&self) -> S {
        self.vector.dx
    }

    #[inline]
    pub fn y(&self) -> S {
        self.vector.dy
    }

    #[inline]
    pub fn set_x(&mut self, x: S) {
        self.vector.dx = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: S) {
        self.vector.dy = y;
    }

    /// Offset from the origin.
    #[inline]
    pub fn to_vector(&self) -> Vector2<S> {
        self.vector
    }

    /// Euclidean distance, `(self - that).length()`.
    #[inline]
    pub fn distance_to(&self, that: Point2<S>) -> S {
        (*self - that).length()
    }
}

impl<S: Scalar> From<Vector2<S>> for Point2<S> {
    #[inline]
    fn from(vector: Vector2<S>) -> Self {
        Self { vector }
    }
}

impl<S: Scalar> From<Point2<S>> for Vector2<S> {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        point.vector
    }
}

impl<S: Scalar> From<(S, S)> for Point2<S> {
    #[inline]
    fn from((x, y): (S, S)) -> Self {
        Self::new(x, y)
    }
}

impl<S: Scalar> fmt::Display for Point2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x(), self.y())
    }
}

impl<S: Scalar> Sub for Point2<S> {
    type Output = Vector2<S>;
    #[inline]
    fn sub(self, rhs: Self) -> Vector2<S> {
        self.vector - rhs.vector
    }
}

impl<S: Scalar> Add<Vector2<S>> for Point2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector2<S>) -> Self {
        Self::from(self.vector + rhs)
    }
}

impl<S: Scalar> AddAssign<Vector2<S>> for Point2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2<S>) {
        self.vector += rhs;
    }
}

impl<S: Scalar> Sub<Vector2<S>> for Point2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Vector2<S>) -> Self {
        Self::from(self.vector - rhs)
    }
}

impl<S: Scalar> SubAssign<Vector2<S>> for Point2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2<S>) {
        self.vector -= rhs;
    }
}

impl<S: Scalar> AbsDiffEq for Point2<S> {
    type Epsilon = S;
    fn default_epsilon() -> S {
        S::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: S) -> bool {
        self.vector.abs_diff_eq(&other.vector, epsilon)
    }
}

impl<S: Scalar> RelativeEq for Point2<S> {
    fn default_max_relative() -> S {
        S::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: S, max_relative: S) -> bool {
        self.vector.relative_eq(&other.vector, epsilon, max_relative)
    }
}

impl<S: Scalar> UlpsEq for Point2<S> {
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }
    fn ulps_eq(&self, other: &Self, epsilon: S, max_ulps: u32) -> bool {
        self.vector.ulps_eq(&other.vector, epsilon, max_ulps)
    }
}
