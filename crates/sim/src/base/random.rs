//! Random draws used by the demographic model.
//!
//! Every stochastic decision in a job goes through a single [`RandomSource`],
//! so a whole job is reproducible from one seed as long as the draws are made
//! in the same order.

use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Gamma, Poisson};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// The four draws the engine needs, plus the seeding contract.
///
/// `reseed` restarts the stream deterministically: two sources reseeded with
/// the same value produce the same sequence of draws afterwards.
pub trait RandomSource {
    /// `true` with probability `p`. Values outside `[0, 1]` are clamped and
    /// NaN counts as 0.
    fn bernoulli(&mut self, p: f64) -> bool;

    /// Poisson count with mean `lambda`. Returns 0 without drawing when
    /// `lambda` is not a positive finite number.
    fn poisson(&mut self, lambda: f64) -> u64;

    /// Beta variate with shape parameters `shape` and `rate`.
    ///
    /// Zero parameters are handled at the boundary: `(0, 0)` yields 0 or 1
    /// with equal probability, `(0, b)` yields 0 and `(a, 0)` yields 1.
    fn beta(&mut self, shape: f64, rate: f64) -> f64;

    /// Gamma variate with the given shape and rate (mean `shape / rate`).
    /// Returns 0 when either parameter is not a positive finite number.
    fn gamma(&mut self, shape: f64, rate: f64) -> f64;

    fn reseed(&mut self, seed: u64);
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn bernoulli(&mut self, p: f64) -> bool {
        (**self).bernoulli(p)
    }

    fn poisson(&mut self, lambda: f64) -> u64 {
        (**self).poisson(lambda)
    }

    fn beta(&mut self, shape: f64, rate: f64) -> f64 {
        (**self).beta(shape, rate)
    }

    fn gamma(&mut self, shape: f64, rate: f64) -> f64 {
        (**self).gamma(shape, rate)
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}

/// [`RandomSource`] backed by any seedable `rand` generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSource<R> {
    rng: R,
}

/// Default stream used by the driver.
pub type DrawStream = RngSource<Xoshiro256PlusPlus>;

impl<R: Rng + SeedableRng> RngSource<R> {
    /// Wrap an existing generator, continuing its stream.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Deterministic stream derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
        }
    }

    /// Stream seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: R::from_rng(&mut rand::rng()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[inline]
fn positive_finite(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl<R: Rng + SeedableRng> RandomSource for RngSource<R> {
    fn bernoulli(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.random_bool(p)
    }

    fn poisson(&mut self, lambda: f64) -> u64 {
        if !positive_finite(lambda) {
            return 0;
        }
        match Poisson::new(lambda) {
            Ok(dist) => {
                let count: f64 = dist.sample(&mut self.rng);
                count as u64
            }
            Err(_) => 0,
        }
    }

    fn beta(&mut self, shape: f64, rate: f64) -> f64 {
        let shape = if shape.is_nan() { 0.0 } else { shape.max(0.0) };
        let rate = if rate.is_nan() { 0.0 } else { rate.max(0.0) };

        if shape == 0.0 && rate == 0.0 {
            return if self.rng.random::<f64>() < 0.5 { 0.0 } else { 1.0 };
        }
        if shape == 0.0 || rate == f64::INFINITY {
            return 0.0;
        }
        if rate == 0.0 || shape == f64::INFINITY {
            return 1.0;
        }

        match Beta::new(shape, rate) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => shape / (shape + rate),
        }
    }

    fn gamma(&mut self, shape: f64, rate: f64) -> f64 {
        if !positive_finite(shape) || !positive_finite(rate) {
            return 0.0;
        }
        // rand_distr parameterizes by scale.
        match Gamma::new(shape, 1.0 / rate) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => 0.0,
        }
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
