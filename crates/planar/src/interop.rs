//! Conversions to and from nalgebra.
//!
//! - `Vector2` <-> `nalgebra::Vector2`, `Point2` <-> `nalgebra::Point2`:
//!   plain component copies.
//! - `Angle` <-> `nalgebra::UnitComplex`: incoming rotations are renormalized
//!   so the unit-length invariant holds whatever drift the source carries.

use nalgebra::{RealField, UnitComplex};

use crate::angle::{cos, sin, Angle};
use crate::point::Point2;
use crate::scalar::Scalar;
use crate::vector::Vector2;

impl<S: Scalar> From<nalgebra::Vector2<S>> for Vector2<S> {
    #[inline]
    fn from(v: nalgebra::Vector2<S>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl<S: Scalar> From<Vector2<S>> for nalgebra::Vector2<S> {
    #[inline]
    fn from(v: Vector2<S>) -> Self {
        nalgebra::Vector2::new(v.dx, v.dy)
    }
}

impl<S: Scalar> From<nalgebra::Point2<S>> for Point2<S> {
    #[inline]
    fn from(p: nalgebra::Point2<S>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<S: Scalar> From<Point2<S>> for nalgebra::Point2<S> {
    #[inline]
    fn from(p: Point2<S>) -> Self {
        nalgebra::Point2::new(p.x(), p.y())
    }
}

impl<S: Scalar + RealField> From<UnitComplex<S>> for Angle<S> {
    #[inline]
    fn from(r: UnitComplex<S>) -> Self {
        Angle::from_vector(Vector2::new(r.cos_angle(), r.sin_angle()))
    }
}

impl<S: Scalar + RealField> From<Angle<S>> for UnitComplex<S> {
    #[inline]
    fn from(a: Angle<S>) -> Self {
        UnitComplex::from_cos_sin_unchecked(cos(a), sin(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::vector;

    #[test]
    fn vector_round_trip_is_exact() {
        let v = Vector2::new(1.5, -2.25);
        let n: nalgebra::Vector2<f64> = v.into();
        assert_eq!(n, vector![1.5, -2.25]);
        assert_eq!(Vector2::from(n), v);
    }

    #[test]
    fn point_round_trip_is_exact() {
        let p = Point2::new(-4.0, 0.125);
        let n: nalgebra::Point2<f64> = p.into();
        assert_eq!(n, nalgebra::Point2::new(-4.0, 0.125));
        assert_eq!(Point2::from(n), p);
    }

    #[test]
    fn unit_complex_rotates_like_angle() {
        let a = Angle::from_degrees(30.0);
        let r: UnitComplex<f64> = a.into();
        assert!((r.angle() - std::f64::consts::FRAC_PI_6).abs() < 1e-15);
        let rotated = r * vector![2.0, 1.0];
        assert_abs_diff_eq!(Vector2::from(rotated), Vector2::new(2.0, 1.0).rotated(a), epsilon = 1e-15);
    }

    #[test]
    fn unit_complex_into_angle_renormalizes() {
        let drifted = UnitComplex::from_cos_sin_unchecked(0.6 * 1.001, 0.8 * 1.001);
        let a: Angle<f64> = drifted.into();
        assert!((a.unit_vector().length_squared() - 1.0).abs() < 1e-15);
        assert_abs_diff_eq!(a.unit_vector(), Vector2::new(0.6, 0.8), epsilon = 1e-15);
    }
}
