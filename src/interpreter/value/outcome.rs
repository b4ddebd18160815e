use serde::Serialize;

use crate::{
    ast::{Quantity, format_money_amount},
    interpreter::value::uncertain::UncertainValue,
    presentation::format::format_number,
    util::num::round_to_cents,
};

/// The final value of an evaluation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Point estimate.
    pub mean:     f64,
    /// Lower bound of the interval.
    pub min:      f64,
    /// Upper bound of the interval.
    pub max:      f64,
    /// Monte-Carlo draws, present only when a `~` was evaluated.
    pub samples:  Option<Vec<f64>>,
    /// Lowercase currency code, `None` for plain numbers.
    pub currency: Option<String>,
    /// `<amount><currency>` for money, a formatted number otherwise.
    pub display:  String,
}

impl EvaluationResult {
    /// Wraps a plain-pipeline value.
    #[must_use]
    pub fn from_uncertain(value: UncertainValue) -> Self {
        let display = format_number(value.mean, 0);
        Self { mean: value.mean,
               min: value.min,
               max: value.max,
               samples: value.samples,
               currency: None,
               display }
    }

    /// Builds the result of a currency expression.
    ///
    /// `literal` is the exact final value from the literal reduction; it
    /// decides the currency and the display. `uncertain` carries the
    /// interval and samples when the expression contained a range.
    #[must_use]
    pub fn from_currency(literal: &Quantity, uncertain: Option<UncertainValue>) -> Self {
        let display = display_quantity(literal);
        let currency = literal.currency().map(str::to_string);
        let value = uncertain.unwrap_or_else(|| UncertainValue::exact(literal.amount()));
        Self { mean: value.mean,
               min: value.min,
               max: value.max,
               samples: value.samples,
               currency,
               display }
    }
}

/// Renders a final literal: money amounts rounded to cents.
///
/// ## Example
/// ```
/// use fermi::{ast::Quantity, interpreter::value::outcome::display_quantity};
///
/// assert_eq!(display_quantity(&Quantity::money(0.754_9, "eur")), "0.75eur");
/// assert_eq!(display_quantity(&Quantity::Scalar(2.0)), "2");
/// ```
#[must_use]
pub fn display_quantity(quantity: &Quantity) -> String {
    match quantity {
        Quantity::Scalar(x) => format_number(*x, 0),
        Quantity::Money { amount, currency } => {
            format!("{}{currency}", format_money_amount(round_to_cents(*amount)))
        },
    }
}

/// What [`crate::evaluate_expression_with_steps`] hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsOutcome {
    /// Whether the currency pipeline handled the expression.
    pub is_currency_expression: bool,
    /// Currency of the result, `None` for scalars and plain expressions.
    pub currency:               Option<String>,
    /// Human-readable simplification steps, in order.
    pub steps:                  Vec<String>,
    /// The final value, `None` for an empty plain expression.
    pub result:                 Option<EvaluationResult>,
}
