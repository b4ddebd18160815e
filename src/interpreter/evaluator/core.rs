use tracing::debug;

use crate::{
    config::{DEFAULT_SAMPLE_COUNT, EvaluationOptions},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            interval::Interval,
            sampling::{RANGE_STD_DEV_DIVISOR, Sampler},
        },
        rates::RateGraph,
        value::uncertain::UncertainValue,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one evaluation.
///
/// A `Context` is created fresh for every top-level call. It owns the random
/// state used for sampling and the rate graph built from the caller's rates,
/// so two contexts never observe each other.
#[derive(Debug, Clone)]
pub struct Context {
    /// Number of Monte-Carlo draws per uncertain value.
    pub sample_count: usize,
    /// Random state for `~` ranges.
    pub sampler:      Sampler,
    /// Conversion rates, defaults overlaid with caller overrides.
    pub rates:        RateGraph,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT, &EvaluationOptions::default())
    }
}

impl Context {
    /// Creates a context for `sample_count` draws and the given options.
    #[must_use]
    pub fn new(sample_count: usize, options: &EvaluationOptions) -> Self {
        Self { sample_count,
               sampler: Sampler::new(options.seed),
               rates: RateGraph::new(options.currency_rates.as_ref()) }
    }

    /// Evaluates a `low ~ high` range.
    ///
    /// Both bounds must be exact. The mean is their midpoint, the interval
    /// spans them, and `sample_count` draws come from a normal distribution
    /// whose standard deviation is the range width over
    /// [`RANGE_STD_DEV_DIVISOR`].
    ///
    /// # Errors
    /// [`RuntimeError::TypeError`] when either bound carries samples.
    pub fn sample_range(&mut self,
                        low: &UncertainValue,
                        high: &UncertainValue)
                        -> EvalResult<UncertainValue> {
        if !low.is_exact() || !high.is_exact() {
            return Err(RuntimeError::TypeError { details: "range bounds must be exact numbers".to_string() });
        }
        let (a, b) = (low.mean, high.mean);
        let mean = f64::midpoint(a, b);
        let std_dev = (b - a).abs() / RANGE_STD_DEV_DIVISOR;
        debug!(a, b, std_dev, count = self.sample_count, "sampling range");

        let samples = self.sampler.normal_samples(mean, std_dev, self.sample_count);
        let interval = Interval::spanning(a, b);
        Ok(UncertainValue { mean,
                            min: interval.min,
                            max: interval.max,
                            samples: Some(samples) })
    }
}
