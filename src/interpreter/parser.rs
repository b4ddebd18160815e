/// Entry points of the currency grammar.
///
/// Defines the parse result type and the functions that turn a whole token
/// slice into an expression tree, rejecting trailing tokens.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: addition, multiplication, power and
/// range.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles negation, literals, money literals, groups with a currency suffix
/// and the base placeholder.
pub mod unary;

/// Infix to RPN conversion for the plain pipeline.
///
/// Implements the shunting-yard algorithm with a synthetic unary-minus
/// operator.
pub mod shunting_yard;
