use crate::{
    ast::BinaryOperator,
    interpreter::value::uncertain::UncertainValue,
    util::num::round_to_cents,
};

/// A value of the uncertainty-propagating currency evaluator.
///
/// Arithmetic between two `Money` values of different currencies only
/// happens after the right operand was converted into the left one's
/// currency.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyValue {
    /// A dimensionless value.
    Scalar(UncertainValue),
    /// An amount of money.
    Money {
        /// Lowercase currency code.
        currency: String,
        /// Amount in units of `currency`.
        value:    UncertainValue,
    },
}

impl CurrencyValue {
    /// Builds a money value, rounding every number to cents.
    #[must_use]
    pub fn money(currency: String, value: &UncertainValue) -> Self {
        Self::Money { currency,
                      value: value.map_monotonic(round_to_cents) }
    }

    /// The numeric payload.
    #[must_use]
    pub const fn value(&self) -> &UncertainValue {
        match self {
            Self::Scalar(value) | Self::Money { value, .. } => value,
        }
    }

    /// Consumes `self`, returning the numeric payload.
    #[must_use]
    pub fn into_value(self) -> UncertainValue {
        match self {
            Self::Scalar(value) | Self::Money { value, .. } => value,
        }
    }

    /// The currency code, or `None` for scalars.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Money { currency, .. } => Some(currency),
        }
    }

    /// Short kind name used in type errors.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Money { .. } => "money",
        }
    }
}

/// Describes an unsupported operand combination for error messages.
#[must_use]
pub fn describe_mismatch(left: &str, op: BinaryOperator, right: &str) -> String {
    format!("cannot apply '{op}' to {left} and {right}")
}
