use tracing::debug;

use crate::{
    ast::Expr,
    error::{ParseError, Result},
    interpreter::{
        evaluator::core::Context,
        money_lexer::{MoneyToken, render_tokens, tokenize_money},
        parser::core::parse_tokens,
        value::outcome::{EvaluationResult, StepsOutcome},
    },
};

/// A top-level `to <currency>` clause and what follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<'a> {
    /// Index of the `to` keyword in the token stream.
    pub position: usize,
    /// Lowercase target currency.
    pub target:   String,
    /// Tokens after the currency code; empty when there is no tail.
    pub tail:     &'a [MoneyToken],
}

/// Finds the first `to` keyword at parenthesis depth zero.
///
/// # Errors
/// [`ParseError::ExpectedCurrency`] when the keyword is not followed by a
/// currency code.
pub fn find_conversion(tokens: &[MoneyToken]) -> Result<Option<Conversion<'_>>> {
    let mut depth = 0_usize;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            MoneyToken::LParen => depth += 1,
            MoneyToken::RParen => depth = depth.saturating_sub(1),
            MoneyToken::To if depth == 0 => {
                return match tokens.get(position + 1) {
                    Some(MoneyToken::Identifier(target)) => {
                        Ok(Some(Conversion { position,
                                             target: target.clone(),
                                             tail: &tokens[position + 2..] }))
                    },
                    other => Err(ParseError::ExpectedCurrency { found: other.map(ToString::to_string) }.into()),
                };
            },
            _ => {},
        }
    }

    Ok(None)
}

/// Whether the token stream should go through the currency pipeline.
///
/// True when there is a top-level conversion, a money literal, or a number
/// or closing parenthesis directly followed by a currency code.
///
/// # Example
/// ```
/// use fermi::interpreter::{currency::is_currency_expression, money_lexer::tokenize_money};
///
/// assert!(is_currency_expression(&tokenize_money("120usd").unwrap(), false));
/// assert!(is_currency_expression(&tokenize_money("(1 + 2) pln").unwrap(), false));
/// assert!(!is_currency_expression(&tokenize_money("1 + 2").unwrap(), false));
/// ```
#[must_use]
pub fn is_currency_expression(tokens: &[MoneyToken], has_conversion: bool) -> bool {
    has_conversion
    || tokens.iter().any(|t| matches!(t, MoneyToken::Money(_)))
    || tokens.windows(2).any(|pair| {
                            matches!(pair,
                                     [MoneyToken::Number(_) | MoneyToken::RParen,
                                      MoneyToken::Identifier(_)])
                        })
}

impl Context {
    /// Evaluates an expression through the currency pipeline.
    ///
    /// 1. Lex, locate a top-level `to <currency>` clause, and decide whether
    ///    this is a currency expression at all (`None` if not).
    /// 2. Reduce the part before `to` literal by literal, recording steps
    ///    with the `to ...` suffix.
    /// 3. Convert the literal, then substitute it into the tail (if any) and
    ///    keep reducing.
    /// 4. If the expression contains `~`, evaluate it again with uncertainty
    ///    propagation for the interval and samples.
    ///
    /// # Errors
    /// Syntax errors from lexing and parsing, and every evaluation error of
    /// the reduction and uncertainty passes.
    pub fn eval_currency(&mut self, input: &str) -> Result<Option<StepsOutcome>> {
        let tokens = tokenize_money(input)?;
        let conversion = find_conversion(&tokens)?;
        if !is_currency_expression(&tokens, conversion.is_some()) {
            debug!(input, "not a currency expression");
            return Ok(None);
        }
        debug!(input, target = conversion.as_ref().map(|c| c.target.as_str()), "currency expression");

        let (lhs_tokens, suffix) = match &conversion {
            Some(c) => (&tokens[..c.position], format!(" {}", render_tokens(&tokens[c.position..]))),
            None => (&tokens[..], String::new()),
        };
        let lhs = parse_tokens(lhs_tokens, false)?;
        let tail = match &conversion {
            Some(c) if !c.tail.is_empty() => {
                let mut tail_tokens = Vec::with_capacity(c.tail.len() + 1);
                tail_tokens.push(MoneyToken::base());
                tail_tokens.extend_from_slice(c.tail);
                Some(parse_tokens(&tail_tokens, true)?)
            },
            _ => None,
        };

        let mut steps = Vec::new();
        let mut literal = self.reduce_to_literal(&lhs, &suffix, &mut steps)?;
        if let Some(c) = &conversion {
            literal = self.convert_quantity(&literal, &c.target)?;
            match &tail {
                Some(tail) => {
                    let substituted = tail.substitute_base(&literal);
                    literal = self.reduce_to_literal(&substituted, "", &mut steps)?;
                },
                None => steps.push(literal.to_string()),
            }
        }

        let has_range = lhs.contains_range() || tail.as_ref().is_some_and(Expr::contains_range);
        let uncertain = if has_range {
            let mut value = self.eval_uncertain(&lhs, None)?;
            if let Some(c) = &conversion {
                value = self.convert_value(value, &c.target)?;
                if let Some(tail) = &tail {
                    value = self.eval_uncertain(tail, Some(&value))?;
                }
            }
            Some(value.into_value())
        } else {
            None
        };

        let result = EvaluationResult::from_currency(&literal, uncertain);
        Ok(Some(StepsOutcome { is_currency_expression: true,
                               currency:               result.currency.clone(),
                               steps,
                               result:                 Some(result), }))
    }
}
