/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of an
/// expression: unrecognized characters, mismatched parentheses, unexpected or
/// trailing tokens and a premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: operand
/// kind mismatches, stack underflow, expressions that cannot be simplified and
/// currencies without a conversion path.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure surfaced by the public entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

/// Result type of the crate-level entry points.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Syntax error: {e}"),
            Self::Runtime(e) => write!(f, "Evaluation error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
