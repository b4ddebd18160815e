use std::borrow::Cow;

use serde::Serialize;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, interval::Interval},
    util::num::divide,
};

/// A best-estimate mean, a bounding interval and optional samples.
///
/// `samples` is only present once randomness entered the computation (a `~`
/// was evaluated); its length is always the configured sample count. While
/// all three numbers are finite, `min <= mean <= max` holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UncertainValue {
    /// Point estimate computed from the operands' means.
    pub mean:    f64,
    /// Lower bound of the interval.
    pub min:     f64,
    /// Upper bound of the interval.
    pub max:     f64,
    /// Monte-Carlo draws, when any operand was uncertain.
    pub samples: Option<Vec<f64>>,
}

impl UncertainValue {
    /// An exact value: degenerate interval, no samples.
    ///
    /// ## Example
    /// ```
    /// use fermi::interpreter::value::uncertain::UncertainValue;
    ///
    /// let v = UncertainValue::exact(2.5);
    /// assert_eq!((v.min, v.mean, v.max), (2.5, 2.5, 2.5));
    /// assert!(v.is_exact());
    /// ```
    #[must_use]
    pub const fn exact(x: f64) -> Self {
        Self { mean:    x,
               min:     x,
               max:     x,
               samples: None, }
    }

    /// Whether no randomness has entered this value.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.samples.is_none()
    }

    /// The bounds as an [`Interval`].
    #[must_use]
    pub const fn interval(&self) -> Interval {
        Interval { min: self.min,
                   max: self.max, }
    }

    fn from_parts(mean: f64, interval: Interval, samples: Option<Vec<f64>>) -> Self {
        Self { mean,
               min: interval.min,
               max: interval.max,
               samples }
    }

    /// Negates mean, interval and samples.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_parts(-self.mean,
                         self.interval().negate(),
                         self.samples
                             .as_ref()
                             .map(|s| s.iter().map(|x| -x).collect()))
    }

    /// Applies a monotonically non-decreasing map to every number.
    ///
    /// Used for positive rate scaling and cent rounding, both of which keep
    /// the interval ordered.
    #[must_use]
    pub fn map_monotonic<F>(&self, f: F) -> Self
        where F: Fn(f64) -> f64
    {
        Self { mean:    f(self.mean),
               min:     f(self.min),
               max:     f(self.max),
               samples: self.samples
                            .as_ref()
                            .map(|s| s.iter().map(|x| f(*x)).collect()), }
    }

    /// Combines two values with an arithmetic operator.
    ///
    /// The mean comes from point arithmetic on the means, the bounds from
    /// interval arithmetic. When either side carries samples, the other is
    /// lifted to a constant sample vector and the draws are combined
    /// elementwise.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownOperator`] for `~`, which needs the sampler and
    /// is handled by the evaluator.
    ///
    /// # Example
    /// ```
    /// use fermi::{ast::BinaryOperator, interpreter::value::uncertain::UncertainValue};
    ///
    /// let a = UncertainValue { mean:    2.0,
    ///                          min:     1.0,
    ///                          max:     3.0,
    ///                          samples: None, };
    /// let b = UncertainValue::exact(-2.0);
    /// let product = a.combine(BinaryOperator::Mul, &b, 16).unwrap();
    /// assert_eq!((product.min, product.mean, product.max), (-6.0, -4.0, -2.0));
    /// ```
    pub fn combine(&self,
                   op: BinaryOperator,
                   rhs: &Self,
                   sample_count: usize)
                   -> EvalResult<Self> {
        let (a, b) = (self.interval(), rhs.interval());
        let interval = match op {
            BinaryOperator::Add => a.add(b),
            BinaryOperator::Sub => a.sub(b),
            BinaryOperator::Mul => a.mul(b),
            BinaryOperator::Div => a.div(b),
            BinaryOperator::Pow => a.pow(b),
            BinaryOperator::Range => {
                return Err(RuntimeError::UnknownOperator { operator: op.to_string() });
            },
        };
        let mean = apply_point(op, self.mean, rhs.mean);

        let samples = if self.is_exact() && rhs.is_exact() {
            None
        } else {
            let left = self.lifted_samples(sample_count);
            let right = rhs.lifted_samples(sample_count);
            Some(left.iter()
                     .zip(right.iter())
                     .map(|(x, y)| apply_point(op, *x, *y))
                     .collect())
        };

        Ok(Self::from_parts(mean, interval, samples))
    }

    /// The samples, or `sample_count` copies of the mean for exact values.
    #[must_use]
    pub fn lifted_samples(&self, sample_count: usize) -> Cow<'_, [f64]> {
        match &self.samples {
            Some(samples) => Cow::Borrowed(samples),
            None => Cow::Owned(vec![self.mean; sample_count]),
        }
    }
}

/// Point arithmetic on two numbers. Division by zero gives `NaN`.
#[must_use]
pub fn apply_point(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => divide(a, b),
        BinaryOperator::Pow => a.powf(b),
        BinaryOperator::Range => (a + b) / 2.0,
    }
}
