use crate::{
    ast::{BinaryOperator, Expr, Quantity, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            currency::{CurrencyValue, describe_mismatch},
            uncertain::UncertainValue,
        },
    },
};

impl Context {
    /// Evaluates a currency tree while propagating uncertainty.
    ///
    /// Same operator table as [`Context::fold_binary`], but every operand is
    /// a mean, an interval and optional samples. Ranges draw samples, money
    /// results round mean, bounds and each sample to cents, and money
    /// operands in another currency are converted (mean, bounds and samples)
    /// before being combined.
    ///
    /// `base` is substituted for [`Expr::Base`] when evaluating the tail of a
    /// `to <currency>` clause.
    ///
    /// # Errors
    /// Operand kind mismatches, inexact range bounds, a placeholder without a
    /// base value and missing exchange rates.
    ///
    /// # Example
    /// ```
    /// use fermi::{
    ///     config::EvaluationOptions,
    ///     interpreter::{
    ///         evaluator::core::Context, money_lexer::tokenize_money, parser::core::parse_tokens,
    ///     },
    /// };
    ///
    /// let expr = parse_tokens(&tokenize_money("(10~20)eur * 2").unwrap(), false).unwrap();
    /// let mut context = Context::new(64, &EvaluationOptions::default().seeded(1));
    /// let value = context.eval_uncertain(&expr, None).unwrap();
    ///
    /// assert_eq!(value.currency(), Some("eur"));
    /// assert_eq!((value.value().min, value.value().max), (20.0, 40.0));
    /// assert_eq!(value.value().samples.as_ref().map(Vec::len), Some(64));
    /// ```
    pub fn eval_uncertain(&mut self,
                          expr: &Expr,
                          base: Option<&CurrencyValue>)
                          -> EvalResult<CurrencyValue> {
        match expr {
            Expr::Literal(Quantity::Scalar(x)) => Ok(CurrencyValue::Scalar(UncertainValue::exact(*x))),
            Expr::Literal(Quantity::Money { amount, currency }) => {
                Ok(CurrencyValue::Money { currency: currency.clone(),
                                          value:    UncertainValue::exact(*amount), })
            },
            Expr::Base => base.cloned().ok_or_else(|| RuntimeError::TypeError {
                                            details: "base placeholder used outside a conversion".to_string(),
                                        }),
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => Ok(match self.eval_uncertain(expr, base)? {
                CurrencyValue::Scalar(value) => CurrencyValue::Scalar(value.negate()),
                CurrencyValue::Money { currency, value } => CurrencyValue::Money { currency,
                                                                                   value: value.negate() },
            }),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval_uncertain(left, base)?;
                let right = self.eval_uncertain(right, base)?;
                self.eval_uncertain_binary(*op, left, right)
            },
        }
    }

    fn eval_uncertain_binary(&mut self,
                             op: BinaryOperator,
                             left: CurrencyValue,
                             right: CurrencyValue)
                             -> EvalResult<CurrencyValue> {
        use BinaryOperator::{Add, Div, Mul, Pow, Range, Sub};
        use CurrencyValue::{Money, Scalar};

        let count = self.sample_count;
        match (op, left, right) {
            (Range, Scalar(a), Scalar(b)) => Ok(Scalar(self.sample_range(&a, &b)?)),
            (_, Scalar(a), Scalar(b)) => Ok(Scalar(a.combine(op, &b, count)?)),

            (Add | Sub, Money { currency, value: a }, Money { currency: from, value: b }) => {
                let b = self.convert_uncertain(&b, &from, &currency)?;
                Ok(CurrencyValue::money(currency, &a.combine(op, &b, count)?))
            },
            (Div, Money { currency, value: a }, Money { currency: from, value: b }) => {
                let b = self.convert_uncertain(&b, &from, &currency)?;
                Ok(Scalar(a.combine(op, &b, count)?))
            },

            (Mul | Div | Pow, Money { currency, value: a }, Scalar(b)) => {
                Ok(CurrencyValue::money(currency, &a.combine(op, &b, count)?))
            },
            (Mul, Scalar(a), Money { currency, value: b }) => {
                Ok(CurrencyValue::money(currency, &a.combine(op, &b, count)?))
            },

            (_, left, right) => {
                Err(RuntimeError::TypeError { details: describe_mismatch(left.kind_name(),
                                                                         op,
                                                                         right.kind_name()) })
            },
        }
    }

    /// Expresses an amount held in `from` in `to`, rounded to cents.
    fn convert_uncertain(&self,
                         value: &UncertainValue,
                         from: &str,
                         to: &str)
                         -> EvalResult<UncertainValue> {
        let rate = self.rates.rate(from, to)?;
        Ok(value.map_monotonic(|x| x * rate))
    }

    /// Converts a money value into `target`.
    ///
    /// # Errors
    /// [`RuntimeError::TypeError`] for scalars and
    /// [`RuntimeError::MissingExchangeRate`] when no path exists.
    pub fn convert_value(&self, value: CurrencyValue, target: &str) -> EvalResult<CurrencyValue> {
        match value {
            CurrencyValue::Scalar(_) => {
                Err(RuntimeError::TypeError { details: format!("cannot convert a plain number to {target}") })
            },
            CurrencyValue::Money { currency, value } => {
                let converted = self.convert_uncertain(&value, &currency, target)?;
                Ok(CurrencyValue::money(target.to_string(), &converted))
            },
        }
    }
}
