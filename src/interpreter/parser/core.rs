use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{money_lexer::MoneyToken, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full currency expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy:
///
/// ```text
///     expression := additive
///     additive   := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := power (("*" | "/") power)*
///     power      := range ("^" range)*
///     range      := unary ("~" range)?
///     unary      := "-" unary | primary
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `allow_base`: Whether the base placeholder may appear as an operand.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, allow_base: bool) -> ParseResult<Expr>
    where I: Iterator<Item = &'a MoneyToken>
{
    parse_additive(tokens, allow_base)
}

/// Parses a complete token slice into a single expression.
///
/// # Errors
/// Any parse error from the grammar, [`ParseError::UnexpectedEndOfInput`] for
/// an empty slice, and [`ParseError::UnexpectedTrailingTokens`] when tokens
/// remain after a complete expression.
///
/// # Example
/// ```
/// use fermi::interpreter::{money_lexer::tokenize_money, parser::core::parse_tokens};
///
/// let tokens = tokenize_money("(60~115)pln").unwrap();
/// let expr = parse_tokens(&tokens, false).unwrap();
/// assert_eq!(expr.to_string(), "(60 ~ 115) * 1pln");
/// ```
pub fn parse_tokens(tokens: &[MoneyToken], allow_base: bool) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, allow_base)?;

    if let Some(token) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string() });
    }

    Ok(expr)
}
