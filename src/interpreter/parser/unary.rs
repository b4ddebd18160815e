use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Quantity},
    error::ParseError,
    interpreter::{
        money_lexer::{BASE_PLACEHOLDER, MoneyLiteral, MoneyToken},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Negation binds tighter than every binary operator, so `-2^2` is `(-2)^2`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    if let Some(MoneyToken::Minus) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, allow_base)?;
        Ok(Expr::negate(expr))
    } else {
        parse_primary(tokens, allow_base)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are:
/// - money literals (`120usd`)
/// - numbers, optionally followed by a currency code (`120 usd`)
/// - parenthesized expressions, optionally followed by a currency code, which
///   multiplies the group by one unit of that currency (`(60~115)pln`)
/// - the base placeholder, when `allow_base` is set
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        MoneyToken::Number(x) => {
            if let Some(currency) = take_currency(tokens) {
                return Ok(Expr::Literal(Quantity::money(*x, &currency)));
            }
            Ok(Expr::Literal(Quantity::Scalar(*x)))
        },
        MoneyToken::Money(MoneyLiteral { amount, currency }) => {
            Ok(Expr::Literal(Quantity::money(*amount, currency)))
        },
        MoneyToken::LParen => {
            let inner = parse_grouping(tokens, allow_base)?;
            if let Some(currency) = take_currency(tokens) {
                let unit = Expr::Literal(Quantity::money(1.0, &currency));
                return Ok(Expr::binary(inner, BinaryOperator::Mul, unit));
            }
            Ok(inner)
        },
        MoneyToken::Identifier(name) if allow_base && name == BASE_PLACEHOLDER => Ok(Expr::Base),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string() }),
    }
}

/// Parses the inside of a parenthesized expression, consuming the closing `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    let expr = parse_expression(tokens, allow_base)?;
    match tokens.next() {
        Some(MoneyToken::RParen) => Ok(expr),
        Some(tok) => Err(ParseError::UnexpectedToken { token: tok.to_string() }),
        None => Err(ParseError::ExpectedClosingParen),
    }
}

/// Consumes a currency identifier directly following an operand.
fn take_currency<'a, I>(tokens: &mut Peekable<I>) -> Option<String>
    where I: Iterator<Item = &'a MoneyToken>
{
    match tokens.peek() {
        Some(MoneyToken::Identifier(name)) if name != BASE_PLACEHOLDER => {
            let currency = name.clone();
            tokens.next();
            Some(currency)
        },
        _ => None,
    }
}
