use ordered_float::OrderedFloat;
use serde::Serialize;

/// The 5th and 95th percentiles of a sample set.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Quantiles {
    /// 5th percentile.
    pub p05: f64,
    /// 95th percentile.
    pub p95: f64,
}

/// Extracts the 5th and 95th percentiles.
///
/// Non-finite samples are discarded and the rest sorted ascending. The
/// percentiles are read at index `floor(0.05 n) - 1` and `ceil(0.95 n) - 1`,
/// clamped to the valid range. Without any valid sample both are `NaN`.
///
/// ## Example
/// ```
/// use fermi::presentation::quantiles::get_quantiles;
///
/// let samples: Vec<f64> = (1..=100).map(f64::from).collect();
/// let q = get_quantiles(Some(samples.as_slice()));
/// assert_eq!((q.p05, q.p95), (5.0, 95.0));
///
/// assert!(get_quantiles(None).p05.is_nan());
/// assert!(get_quantiles(Some(&[][..])).p95.is_nan());
/// ```
#[must_use]
pub fn get_quantiles(samples: Option<&[f64]>) -> Quantiles {
    let mut sorted: Vec<OrderedFloat<f64>> = samples.unwrap_or_default()
                                                    .iter()
                                                    .copied()
                                                    .filter(|x| x.is_finite())
                                                    .map(OrderedFloat)
                                                    .collect();
    if sorted.is_empty() {
        return Quantiles { p05: f64::NAN,
                           p95: f64::NAN, };
    }
    sorted.sort_unstable();

    let n = sorted.len();
    let low = (n / 20).saturating_sub(1).min(n - 1);
    let high = (19 * n).div_ceil(20).saturating_sub(1).min(n - 1);

    Quantiles { p05: sorted[low].into_inner(),
                p95: sorted[high].into_inner(), }
}
