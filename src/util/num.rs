/// Minimum that propagates `NaN`, unlike [`f64::min`].
///
/// ## Example
/// ```
/// use fermi::util::num::nan_min;
///
/// assert_eq!(nan_min(&[3.0, -1.0, 2.0]), -1.0);
/// assert!(nan_min(&[1.0, f64::NAN]).is_nan());
/// ```
#[must_use]
pub fn nan_min(values: &[f64]) -> f64 {
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum that propagates `NaN`, unlike [`f64::max`].
#[must_use]
pub fn nan_max(values: &[f64]) -> f64 {
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Division where a zero divisor yields `NaN` rather than an infinity.
///
/// ## Example
/// ```
/// use fermi::util::num::divide;
///
/// assert_eq!(divide(1.0, 4.0), 0.25);
/// assert!(divide(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Rounds a money amount to whole cents.
///
/// ## Example
/// ```
/// use fermi::util::num::round_to_cents;
///
/// assert_eq!(round_to_cents(131.848_341), 131.85);
/// assert!(round_to_cents(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    if !amount.is_finite() {
        return amount;
    }
    (amount * 100.0).round() / 100.0
}

/// Converts a count to `f64` for averaging and scaling.
///
/// Counts in this crate are sample and bin counts, far below 2^53.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn count_to_f64(count: usize) -> f64 {
    count as f64
}
