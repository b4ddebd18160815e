use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Divisor turning the width of a `low~high` range into a standard
/// deviation. The range then spans roughly ±1.645σ, a two-sided 90% interval.
pub const RANGE_STD_DEV_DIVISOR: f64 = 3.289_707_25;

/// Random state of one evaluation.
///
/// Draws normal variates with the Box-Muller transform. Each transform
/// yields two variates; the second is kept as `spare` for the next draw.
/// A `Sampler` belongs to a single evaluation context, so concurrent
/// evaluations never share random state.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng:   ChaCha8Rng,
    spare: Option<f64>,
}

impl Sampler {
    /// A sampler seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self { rng:   ChaCha8Rng::from_entropy(),
               spare: None, }
    }

    /// A reproducible sampler.
    ///
    /// ## Example
    /// ```
    /// use fermi::interpreter::evaluator::sampling::Sampler;
    ///
    /// let a = Sampler::seeded(42).normal_samples(0.0, 1.0, 8);
    /// let b = Sampler::seeded(42).normal_samples(0.0, 1.0, 8);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng:   ChaCha8Rng::seed_from_u64(seed),
               spare: None, }
    }

    /// Seeded when `seed` is given, from entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        trace!(?seed, "creating sampler");
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// A uniform draw in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// One draw from the standard normal distribution.
    pub fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        // Shift to (0, 1] so the logarithm stays finite.
        let u1 = 1.0 - self.uniform();
        let u2 = self.uniform();
        let radius = (-2.0 * u1.ln()).sqrt();
        let angle = TAU * u2;
        self.spare = Some(radius * angle.sin());
        radius * angle.cos()
    }

    /// `count` draws from Normal(`mean`, `std_dev`).
    pub fn normal_samples(&mut self, mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
        (0..count).map(|_| std_dev.mul_add(self.standard_normal(), mean))
                  .collect()
    }
}
