/// Core evaluation state.
///
/// Defines the evaluation context, the result alias and range sampling.
pub mod core;

/// Interval arithmetic with `NaN`-propagating bounds.
pub mod interval;

/// Random state and normal draws.
pub mod sampling;

/// Evaluation of RPN queues from the plain pipeline.
pub mod rpn;

/// Exact single-value folding of currency trees, with step recording.
pub mod reduction;

/// Uncertainty-propagating evaluation of currency trees.
pub mod uncertain;
