use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        money_lexer::MoneyToken,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    let mut left = parse_multiplicative(tokens, allow_base)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        let right = parse_multiplicative(tokens, allow_base)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    let mut left = parse_power(tokens, allow_base)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        tokens.next();
        let right = parse_power(tokens, allow_base)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation groups to the left here, matching the RPN pipeline:
/// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// The rule is: `power := range ("^" range)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    let mut left = parse_range(tokens, allow_base)?;
    while let Some(MoneyToken::Caret) = tokens.peek() {
        tokens.next();
        let right = parse_range(tokens, allow_base)?;
        left = Expr::binary(left, BinaryOperator::Pow, right);
    }
    Ok(left)
}

/// Parses uncertain ranges.
///
/// `~` binds tighter than `^` and is right-associative:
/// `1 ~ 2 ~ 3` parses as `1 ~ (2 ~ 3)`.
///
/// The rule is: `range := unary ("~" range)?`
pub fn parse_range<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    let left = parse_unary(tokens, allow_base)?;
    if let Some(MoneyToken::Tilde) = tokens.peek() {
        tokens.next();
        let right = parse_range(tokens, allow_base)?;
        return Ok(Expr::binary(left, BinaryOperator::Range, right));
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use fermi::{
///     ast::BinaryOperator,
///     interpreter::{money_lexer::MoneyToken, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&MoneyToken::Tilde),
///            Some(BinaryOperator::Range));
/// assert_eq!(token_to_binary_operator(&MoneyToken::To), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &MoneyToken) -> Option<BinaryOperator> {
    match token {
        MoneyToken::Plus => Some(BinaryOperator::Add),
        MoneyToken::Minus => Some(BinaryOperator::Sub),
        MoneyToken::Star => Some(BinaryOperator::Mul),
        MoneyToken::Slash => Some(BinaryOperator::Div),
        MoneyToken::Caret => Some(BinaryOperator::Pow),
        MoneyToken::Tilde => Some(BinaryOperator::Range),
        _ => None,
    }
}
