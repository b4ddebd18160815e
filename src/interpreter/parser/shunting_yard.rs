use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// An operator in Reverse Polish Notation.
///
/// `Neg` is the synthetic unary minus. It is kept apart from binary `Sub` so
/// precedence and associativity can be assigned to it independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Uncertain range (`~`)
    Range,
    /// Unary negation
    Neg,
}

impl Operator {
    /// Precedence, from `+ -` (1) up to unary negation (5).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            Self::Range => 4,
            Self::Neg => 5,
        }
    }

    /// `~` and unary negation group to the right; everything else to the left.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Range | Self::Neg)
    }

    /// Number of operands consumed during evaluation.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Neg => 1,
            _ => 2,
        }
    }

    const fn from_binary_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Caret => Some(Self::Pow),
            Token::Tilde => Some(Self::Range),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Range => "~",
            Self::Neg => "NEG",
        };
        write!(f, "{operator}")
    }
}

/// An element of an RPN queue.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RpnToken {
    /// A literal operand.
    Number(f64),
    /// An operator applied to the operands before it.
    Operator(Operator),
}

impl std::fmt::Display for RpnToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Entries of the operator stack: operators or an open parenthesis.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    Operator(Operator),
    LParen,
}

/// Converts an infix token sequence to Reverse Polish Notation.
///
/// A `-` is unary exactly when it is the first token or follows anything
/// other than a number or `)`; it is then pushed as the synthetic
/// [`Operator::Neg`].
///
/// # Errors
/// [`ParseError::MismatchedParentheses`] when a `)` has no opening partner or
/// a `(` is never closed.
///
/// # Example
/// ```
/// use fermi::interpreter::{
///     lexer::tokenize,
///     parser::shunting_yard::{Operator, RpnToken, to_rpn},
/// };
///
/// let rpn = to_rpn(&tokenize("-2+5").unwrap()).unwrap();
/// assert_eq!(rpn,
///            vec![RpnToken::Number(2.0),
///                 RpnToken::Operator(Operator::Neg),
///                 RpnToken::Number(5.0),
///                 RpnToken::Operator(Operator::Add)]);
/// ```
pub fn to_rpn(tokens: &[Token]) -> ParseResult<Vec<RpnToken>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut previous: Option<Token> = None;

    for &token in tokens {
        match token {
            Token::Number(x) => output.push(RpnToken::Number(x)),
            Token::LParen => stack.push(Pending::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::LParen) => break,
                    Some(Pending::Operator(op)) => output.push(RpnToken::Operator(op)),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            _ => {
                let unary = token == Token::Minus
                            && !matches!(previous, Some(Token::Number(_) | Token::RParen));
                let op = if unary {
                    Operator::Neg
                } else {
                    Operator::from_binary_token(token).ok_or_else(|| {
                        ParseError::UnexpectedToken { token: token.to_string() }
                    })?
                };
                push_operator(op, &mut stack, &mut output);
            },
        }
        previous = Some(token);
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(RpnToken::Operator(op)),
            Pending::LParen => return Err(ParseError::MismatchedParentheses),
        }
    }

    Ok(output)
}

/// Pops operators that bind at least as tightly as `op`, then pushes `op`.
fn push_operator(op: Operator, stack: &mut Vec<Pending>, output: &mut Vec<RpnToken>) {
    while let Some(&Pending::Operator(top)) = stack.last() {
        let pops = if op.is_right_associative() {
            top.precedence() > op.precedence()
        } else {
            top.precedence() >= op.precedence()
        };
        if !pops {
            break;
        }
        stack.pop();
        output.push(RpnToken::Operator(top));
    }
    stack.push(Pending::Operator(op));
}
