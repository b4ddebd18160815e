/// The evaluator module turns RPN queues and expression trees into values.
///
/// It holds the per-call evaluation [`Context`](evaluator::core::Context)
/// with its random state and rate graph, and implements interval arithmetic,
/// Monte-Carlo sampling, literal reduction and uncertainty propagation.
pub mod evaluator;
/// The plain tokenizer.
///
/// Produces numbers and the one-character operators `+ - * / ^ ~ ( )`.
pub mod lexer;
/// The currency-aware tokenizer.
///
/// Adds money literals, currency identifiers and the `to` keyword to the
/// plain token set.
pub mod money_lexer;
/// Parsers for both pipelines.
///
/// A shunting-yard converter for plain token streams and a recursive-descent
/// parser building expression trees from currency tokens.
pub mod parser;
/// The rate graph used to convert between currencies.
pub mod rates;
/// The top-level currency protocol: detection, reduction steps, conversion
/// and the optional uncertainty pass.
pub mod currency;
/// Runtime value types and result records.
pub mod value;
