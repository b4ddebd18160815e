use logos::Logos;

use crate::error::ParseError;

/// A lexical token of a plain (currency-free) expression.
///
/// The plain grammar only knows decimal numbers and the one-character
/// operators `+ - * / ^ ~ ( )`. A leading minus is never folded into a
/// literal: `1-2` lexes as `1`, `-`, `2`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Tilde => write!(f, "~"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Turns a raw expression into a flat sequence of tokens.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedInput`] carrying the rest of the input
/// from the first character that is neither whitespace, a number nor an
/// operator.
///
/// # Example
/// ```
/// use fermi::interpreter::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("1-2").unwrap(),
///            vec![Token::Number(1.0), Token::Minus, Token::Number(2.0)]);
/// assert!(tokenize("1 + x").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let start = lexer.span().start;
            return Err(ParseError::UnrecognizedInput { fragment: input[start..].to_string(),
                                                       input:    input.to_string(), });
        }
    }

    Ok(tokens)
}
