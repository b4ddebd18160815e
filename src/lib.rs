//! # fermi
//!
//! fermi evaluates arithmetic expressions whose operands may be exact
//! numbers, uncertain ranges (`a~b`) or amounts of money (`120usd`). Every
//! result carries a mean and a guaranteed interval; ranges additionally
//! produce a Monte-Carlo sample set. Currency expressions come with the
//! human-readable steps that simplified them and a final converted value.
//!
//! ```
//! use fermi::{config::EvaluationOptions, evaluate_expression, evaluate_expression_with_steps};
//!
//! let value = evaluate_expression("2 * (3 + 4)", 100).unwrap().unwrap();
//! assert_eq!(value.mean, 14.0);
//!
//! let outcome = evaluate_expression_with_steps("120eur to pln", 100, &EvaluationOptions::default()).unwrap();
//! assert_eq!(outcome.result.unwrap().display, "506.4pln");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use tracing::debug;

use crate::{
    config::EvaluationOptions,
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::shunting_yard::{RpnToken, to_rpn},
        value::{
            outcome::{EvaluationResult, StepsOutcome},
            uncertain::UncertainValue,
        },
    },
};

/// Defines the structure of parsed currency expressions.
///
/// This module declares the `Expr` tree, its operators and the `Quantity`
/// literals, and renders trees back to text for the simplification steps.
pub mod ast;
/// Options callers pass in: rate overrides and the sampler seed.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// Syntax errors, operand kind errors, stack underflow and missing exchange
/// rates. Numeric edge cases are values, not errors.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizers for plain and currency expressions.
/// - Shunting-yard and recursive-descent parsers.
/// - Interval, sample and currency evaluation, and rate resolution.
pub mod interpreter;
/// Display helpers: number formatting, percentiles and text histograms.
pub mod presentation;
/// General numeric helpers.
pub mod util;

pub use config::DEFAULT_SAMPLE_COUNT;
pub use error::{Error, Result};

/// Tokenizes a plain expression.
///
/// # Example
/// ```
/// use fermi::{interpreter::lexer::Token, tokenize};
///
/// assert_eq!(tokenize("2 ~ 3").unwrap(),
///            vec![Token::Number(2.0), Token::Tilde, Token::Number(3.0)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    Ok(interpreter::lexer::tokenize(expression)?)
}

/// Converts plain tokens to Reverse Polish Notation.
pub fn parse_to_rpn(tokens: &[Token]) -> Result<Vec<RpnToken>> {
    Ok(to_rpn(tokens)?)
}

/// Evaluates an RPN queue with a freshly seeded sampler.
///
/// Returns `None` for an empty queue.
pub fn evaluate_rpn(rpn: &[RpnToken], sample_count: usize) -> Result<Option<UncertainValue>> {
    let mut context = Context::new(sample_count, &EvaluationOptions::default());
    Ok(context.eval_rpn(rpn)?)
}

/// Tokenizes, parses and evaluates a plain expression.
///
/// # Example
/// ```
/// use fermi::evaluate_expression;
///
/// let value = evaluate_expression("-2^2", 10).unwrap().unwrap();
/// assert_eq!(value.mean, 4.0);
/// assert!(value.samples.is_none());
///
/// assert!(evaluate_expression("", 10).unwrap().is_none());
/// ```
pub fn evaluate_expression(expression: &str, sample_count: usize) -> Result<Option<UncertainValue>> {
    let rpn = parse_to_rpn(&tokenize(expression)?)?;
    evaluate_rpn(&rpn, sample_count)
}

/// Evaluates an expression for display, with simplification steps.
///
/// Currency expressions (a top-level `to <currency>`, a money literal, or a
/// number or group followed by a currency code) go through the currency
/// pipeline. Everything else is evaluated by the plain pipeline and wrapped
/// with no steps.
///
/// # Example
/// ```
/// use fermi::{config::EvaluationOptions, evaluate_expression_with_steps};
///
/// let outcome = evaluate_expression_with_steps("1 + 2", 10, &EvaluationOptions::default()).unwrap();
/// assert!(!outcome.is_currency_expression);
/// assert!(outcome.steps.is_empty());
/// assert_eq!(outcome.result.unwrap().display, "3");
/// ```
pub fn evaluate_expression_with_steps(expression: &str,
                                      sample_count: usize,
                                      options: &EvaluationOptions)
                                      -> Result<StepsOutcome> {
    let mut context = Context::new(sample_count, options);

    if let Some(outcome) = context.eval_currency(expression)? {
        return Ok(outcome);
    }

    debug!(expression, "falling back to the plain pipeline");
    let rpn = parse_to_rpn(&tokenize(expression)?)?;
    let result = context.eval_rpn(&rpn)?.map(EvaluationResult::from_uncertain);
    Ok(StepsOutcome { is_currency_expression: false,
                      currency: None,
                      steps: Vec::new(),
                      result })
}
