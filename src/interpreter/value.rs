/// Mean, bounding interval and optional Monte-Carlo samples.
///
/// The value type of the plain pipeline and the numeric payload of every
/// currency value.
pub mod uncertain;
/// Scalar or money values carried by the uncertainty-propagating currency
/// evaluator.
pub mod currency;
/// Result records handed back to callers.
pub mod outcome;
