#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The tokenizer met text that is neither a number nor an operator.
    UnrecognizedInput {
        /// The remaining input, starting at the offending character.
        fragment: String,
        /// The full expression being tokenized.
        input:    String,
    },
    /// A `)` without a matching `(`, or a `(` that was never closed.
    MismatchedParentheses,
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// The `to` keyword was not followed by a currency code.
    ExpectedCurrency {
        /// What was found instead, if anything.
        found: Option<String>,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { fragment, input } => {
                write!(f, "Unrecognized input '{fragment}' in expression '{input}'.")
            },

            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),

            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of expression."),

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Extra tokens after expression. Check your input: {token}"),

            Self::ExpectedCurrency { found: Some(token) } => {
                write!(f, "Expected a currency code after 'to', found {token}.")
            },
            Self::ExpectedCurrency { found: None } => {
                write!(f, "Expected a currency code after 'to'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
