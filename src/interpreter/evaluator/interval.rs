use crate::util::num::{divide, nan_max, nan_min};

/// A closed interval `[min, max]` that may hold `NaN` or infinite bounds.
///
/// All operations return guaranteed bounds for every combination of points
/// taken from the operands. `NaN` in any corner makes the corresponding
/// bound `NaN`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// The degenerate interval `[x, x]`.
    #[must_use]
    pub const fn point(x: f64) -> Self {
        Self { min: x, max: x }
    }

    /// The interval spanned by two endpoints in either order.
    #[must_use]
    pub fn spanning(a: f64, b: f64) -> Self {
        Self { min: nan_min(&[a, b]),
               max: nan_max(&[a, b]), }
    }

    /// Whether this is exactly `[0, 0]`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    fn from_corners(corners: [f64; 4]) -> Self {
        Self { min: nan_min(&corners),
               max: nan_max(&corners), }
    }

    /// `-[a, b] = [-b, -a]`.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::spanning(-self.max, -self.min)
    }

    /// Sum of bounds.
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self { min: self.min + rhs.min,
               max: self.max + rhs.max, }
    }

    /// Difference: the low end subtracts the other's high end.
    #[must_use]
    pub fn sub(self, rhs: Self) -> Self {
        Self { min: self.min - rhs.max,
               max: self.max - rhs.min, }
    }

    /// Product over the four corner combinations.
    #[must_use]
    pub fn mul(self, rhs: Self) -> Self {
        Self::from_corners([self.min * rhs.min,
                            self.min * rhs.max,
                            self.max * rhs.min,
                            self.max * rhs.max])
    }

    /// Quotient.
    ///
    /// A divisor touching or straddling zero gives `[NaN, NaN]` for a
    /// divisor of exactly `[0, 0]`, `[0, 0]` for a numerator of exactly
    /// `[0, 0]`, and `[-inf, inf]` otherwise.
    ///
    /// ## Example
    /// ```
    /// use fermi::interpreter::evaluator::interval::Interval;
    ///
    /// let q = Interval { min: 1.0, max: 2.0 }.div(Interval { min: -1.0, max: 1.0 });
    /// assert_eq!(q, Interval { min: f64::NEG_INFINITY, max: f64::INFINITY });
    /// assert!(Interval::point(1.0).div(Interval::point(0.0)).min.is_nan());
    /// ```
    #[must_use]
    pub fn div(self, rhs: Self) -> Self {
        if rhs.min <= 0.0 && rhs.max >= 0.0 {
            if rhs.is_zero() {
                return Self::point(f64::NAN);
            }
            if self.is_zero() {
                return Self::point(0.0);
            }
            return Self { min: f64::NEG_INFINITY,
                          max: f64::INFINITY, };
        }
        Self::from_corners([divide(self.min, rhs.min),
                            divide(self.min, rhs.max),
                            divide(self.max, rhs.min),
                            divide(self.max, rhs.max)])
    }

    /// Power over the four corner combinations.
    #[must_use]
    pub fn pow(self, rhs: Self) -> Self {
        Self::from_corners([self.min.powf(rhs.min),
                            self.min.powf(rhs.max),
                            self.max.powf(rhs.min),
                            self.max.powf(rhs.max)])
    }
}
