#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Numeric accidents such as division by zero are not errors: they surface as
/// `NaN` or infinite values. Only structural and type violations end up here.
pub enum RuntimeError {
    /// An operator found fewer operands on the stack than it needs.
    NotEnoughOperands {
        /// The operator that underflowed.
        operator: String,
    },
    /// The stack held more than one value once the RPN queue was consumed.
    OperandsLeftOver {
        /// How many values were left.
        count: usize,
    },
    /// A value had an unexpected or incompatible kind.
    TypeError {
        /// Details about the kind mismatch.
        details: String,
    },
    /// An operator or token the evaluator has no rule for.
    UnknownOperator {
        /// The operator as written.
        operator: String,
    },
    /// The literal reduction loop stopped on a tree that is not a literal.
    UnableToSimplify {
        /// Rendering of the stuck tree.
        expression: String,
    },
    /// No direct, reciprocal or bridged rate connects two currencies.
    MissingExchangeRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to:   String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughOperands { operator } => {
                write!(f, "Not enough operands for '{operator}'.")
            },
            Self::OperandsLeftOver { count } => {
                write!(f, "{count} operands left over after evaluation.")
            },
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::UnknownOperator { operator } => write!(f, "Unknown operator '{operator}'."),
            Self::UnableToSimplify { expression } => {
                write!(f, "Unable to simplify expression: {expression}.")
            },
            Self::MissingExchangeRate { from, to } => write!(f,
                                                             "Missing exchange rate path from {} to {}.",
                                                             from.to_uppercase(),
                                                             to.to_uppercase()),
        }
    }
}

impl std::error::Error for RuntimeError {}
