use logos::Logos;

use crate::error::ParseError;

/// Reserved identifier that stands for the value computed before a
/// `to <currency>` clause when the tail after the clause is parsed.
pub const BASE_PLACEHOLDER: &str = "__base__";

/// A lexical token of a currency-aware expression.
///
/// On top of the plain operators this lexer recognizes money literals
/// (`120usd`, number immediately followed by letters), bare identifiers
/// (currency codes, case-folded) and the keyword `to`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum MoneyToken {
    /// Numeric literal tokens, such as `60` or `4.22`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// Money literal tokens, such as `120usd` or `9.99EUR`.
    #[regex(r"[0-9]+(\.[0-9]+)?[a-zA-Z]+", parse_money)]
    Money(MoneyLiteral),
    /// The conversion keyword `to`, in any letter case.
    #[token("to", ignore(ascii_case))]
    To,
    /// Identifier tokens, lowercased. Currency codes after numbers, groups
    /// or `to`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_lowercase())]
    Identifier(String),
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

/// The payload of a [`MoneyToken::Money`] literal.
#[derive(Debug, PartialEq, Clone)]
pub struct MoneyLiteral {
    /// The numeric part.
    pub amount:   f64,
    /// Lowercase currency code.
    pub currency: String,
}

impl MoneyToken {
    /// The placeholder token prepended to a post-conversion tail.
    #[must_use]
    pub fn base() -> Self {
        Self::Identifier(BASE_PLACEHOLDER.to_string())
    }
}

impl std::fmt::Display for MoneyToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Money(MoneyLiteral { amount, currency }) => write!(f, "{amount}{currency}"),
            Self::To => write!(f, "to"),
            Self::Identifier(name) => write!(f, "{name}"),
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

/// Splits a money literal slice into amount and lowercase currency.
fn parse_money(lex: &logos::Lexer<MoneyToken>) -> Option<MoneyLiteral> {
    let slice = lex.slice();
    let split = slice.find(|c: char| c.is_ascii_alphabetic())?;
    let amount = slice[..split].parse().ok()?;
    Some(MoneyLiteral { amount,
                        currency: slice[split..].to_lowercase() })
}

/// Tokenizes a currency-aware expression.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedInput`] on the first character no token
/// matches.
///
/// # Example
/// ```
/// use fermi::interpreter::money_lexer::{MoneyLiteral, MoneyToken, tokenize_money};
///
/// let tokens = tokenize_money("120USD to eur").unwrap();
/// assert_eq!(tokens,
///            vec![MoneyToken::Money(MoneyLiteral { amount:   120.0,
///                                                  currency: "usd".to_string(), }),
///                 MoneyToken::To,
///                 MoneyToken::Identifier("eur".to_string())]);
/// ```
pub fn tokenize_money(input: &str) -> Result<Vec<MoneyToken>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = MoneyToken::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let start = lexer.span().start;
                return Err(ParseError::UnrecognizedInput { fragment: input[start..].to_string(),
                                                           input:    input.to_string(), });
            },
        }
    }

    Ok(tokens)
}

/// Renders tokens back to text with single spaces, keeping parentheses tight.
///
/// Used for the `to ...` suffix attached to every step.
///
/// # Example
/// ```
/// use fermi::interpreter::money_lexer::{render_tokens, tokenize_money};
///
/// let tokens = tokenize_money("to pln*(2+1)").unwrap();
/// assert_eq!(render_tokens(&tokens), "to pln * (2 + 1)");
/// ```
#[must_use]
pub fn render_tokens(tokens: &[MoneyToken]) -> String {
    let mut out = String::new();
    let mut previous: Option<&MoneyToken> = None;

    for token in tokens {
        let tight = matches!(previous, None | Some(MoneyToken::LParen))
                    || matches!(token, MoneyToken::RParen);
        if !tight {
            out.push(' ');
        }
        out.push_str(&token.to_string());
        previous = Some(token);
    }

    out
}
