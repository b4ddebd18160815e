/// Floating-point helpers shared by the evaluators.
///
/// The evaluators keep IEEE semantics: `NaN` and infinities flow
/// through every operation instead of raising errors. The helpers here make
/// that explicit where the standard library would otherwise swallow a `NaN`
/// (`f64::min`, `f64::max`).
pub mod num;
