//! Random angles and directions.
//!
//! - `Standard` samples `Angle` uniformly on the circle (radians drawn in
//!   `f64` on `[-π, π)`, then built like any other angle).
//! - `ReplayToken` makes draws reproducible and indexable: the same
//!   `(seed, index)` always yields the same RNG stream.

use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::angle::Angle;
use crate::scalar::Scalar;
use crate::vector::Vector2;

impl<S: Scalar> Distribution<Angle<S>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Angle<S> {
        let r = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
        Angle::from_radians(S::narrow(r))
    }
}

/// Uniformly distributed direction on the unit circle.
#[inline]
pub fn random_unit_vector<S: Scalar, R: Rng + ?Sized>(rng: &mut R) -> Vector2<S> {
    rng.gen::<Angle<S>>().into()
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// `n` angles drawn from this token's stream.
    pub fn angles<S: Scalar>(self, n: usize) -> Vec<Angle<S>> {
        let mut rng = self.to_std_rng();
        (0..n).map(|_| rng.gen()).collect()
    }
}
