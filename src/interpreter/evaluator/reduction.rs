use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, Quantity, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{currency::describe_mismatch, uncertain::apply_point},
    },
    util::num::round_to_cents,
};

impl Context {
    /// Folds a binary operator over two literals.
    ///
    /// | operator | scalar, scalar | money, money           | money, scalar | scalar, money |
    /// |----------|----------------|------------------------|---------------|---------------|
    /// | `~`      | midpoint       | error                  | error         | error         |
    /// | `+ -`    | scalar         | money in left currency | error         | error         |
    /// | `*`      | scalar         | error                  | money         | money         |
    /// | `/`      | scalar         | scalar ratio           | money         | error         |
    /// | `^`      | scalar         | error                  | money         | error         |
    ///
    /// Money operands of different currencies are converted into the left
    /// operand's currency first. Money results are rounded to cents.
    ///
    /// # Errors
    /// - [`RuntimeError::TypeError`] for the combinations marked as errors.
    /// - [`RuntimeError::MissingExchangeRate`] when a conversion has no path.
    ///
    /// # Example
    /// ```
    /// use fermi::{
    ///     ast::{BinaryOperator, Quantity},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let context = Context::default();
    /// let sum = context.fold_binary(BinaryOperator::Add,
    ///                               &Quantity::money(120.0, "eur"),
    ///                               &Quantity::money(50.0, "pln"))
    ///                  .unwrap();
    /// assert_eq!(sum, Quantity::money(131.85, "eur"));
    ///
    /// assert!(context.fold_binary(BinaryOperator::Mul,
    ///                             &Quantity::money(1.0, "eur"),
    ///                             &Quantity::money(1.0, "eur"))
    ///                .is_err());
    /// ```
    pub fn fold_binary(&self,
                       op: BinaryOperator,
                       left: &Quantity,
                       right: &Quantity)
                       -> EvalResult<Quantity> {
        use BinaryOperator::{Add, Div, Mul, Pow, Range, Sub};
        use Quantity::{Money, Scalar};

        match (op, left, right) {
            (_, Scalar(a), Scalar(b)) => Ok(Scalar(apply_point(op, *a, *b))),

            (Add | Sub, Money { amount: a, currency }, Money { .. }) => {
                let b = self.amount_in(right, currency)?;
                Ok(money(apply_point(op, *a, b), currency))
            },
            (Div, Money { amount: a, currency }, Money { .. }) => {
                let b = self.amount_in(right, currency)?;
                Ok(Scalar(apply_point(op, *a, b)))
            },

            (Mul | Div | Pow, Money { amount: a, currency }, Scalar(b))
            | (Mul, Scalar(b), Money { amount: a, currency }) => {
                let amount = if op == Mul { *b * *a } else { apply_point(op, *a, *b) };
                Ok(money(amount, currency))
            },

            (Range | Add | Sub | Mul | Div | Pow, ..) => {
                Err(RuntimeError::TypeError { details: describe_mismatch(left.kind_name(),
                                                                         op,
                                                                         right.kind_name()) })
            },
        }
    }

    /// Folds a unary operator over a literal, keeping its kind.
    #[must_use]
    pub fn fold_unary(op: UnaryOperator, value: &Quantity) -> Quantity {
        match (op, value) {
            (UnaryOperator::Negate, Quantity::Scalar(x)) => Quantity::Scalar(-x),
            (UnaryOperator::Negate, Quantity::Money { amount, currency }) => {
                Quantity::Money { amount:   -amount,
                                  currency: currency.clone(), }
            },
        }
    }

    /// Converts a money literal into `target`, rounding to cents.
    ///
    /// # Errors
    /// [`RuntimeError::TypeError`] for scalars, which have no currency to
    /// convert from, and [`RuntimeError::MissingExchangeRate`] when no path
    /// exists.
    pub fn convert_quantity(&self, value: &Quantity, target: &str) -> EvalResult<Quantity> {
        match value {
            Quantity::Scalar(_) => {
                Err(RuntimeError::TypeError { details: format!("cannot convert a plain number to {target}") })
            },
            Quantity::Money { .. } => Ok(money(self.amount_in(value, target)?, target)),
        }
    }

    /// The amount of a money literal expressed in `currency`.
    fn amount_in(&self, value: &Quantity, currency: &str) -> EvalResult<f64> {
        match value {
            Quantity::Scalar(x) => Ok(*x),
            Quantity::Money { amount, currency: from } => {
                Ok(amount * self.rates.rate(from, currency)?)
            },
        }
    }

    /// Performs one layer of literal reduction.
    ///
    /// Every node whose operands are all literals is folded; nodes above them
    /// are left for the next pass. Returns the new tree and whether anything
    /// was folded.
    pub fn reduce_layer(&self, expr: &Expr) -> EvalResult<(Expr, bool)> {
        match expr {
            Expr::Literal(_) | Expr::Base => Ok((expr.clone(), false)),
            Expr::UnaryOp { op, expr: inner } => {
                if let Some(value) = inner.as_literal() {
                    return Ok((Expr::Literal(Self::fold_unary(*op, value)), true));
                }
                let (inner, progressed) = self.reduce_layer(inner)?;
                Ok((Expr::UnaryOp { op:   *op,
                                    expr: Box::new(inner), },
                    progressed))
            },
            Expr::BinaryOp { left, op, right } => {
                if let (Some(a), Some(b)) = (left.as_literal(), right.as_literal()) {
                    return Ok((Expr::Literal(self.fold_binary(*op, a, b)?), true));
                }
                let (left, left_progressed) = self.reduce_layer(left)?;
                let (right, right_progressed) = self.reduce_layer(right)?;
                Ok((Expr::binary(left, *op, right), left_progressed || right_progressed))
            },
        }
    }

    /// Reduces a tree to a single literal, recording a step per pass.
    ///
    /// The rendering of `expr` is recorded first, followed by one rendering
    /// per pass that folded something. A pass that only changes the tree but
    /// not its rendering (`-5eur` as negation, then as a literal) records
    /// nothing. `suffix` (such as ` to pln * 2`) is appended to every
    /// recorded step.
    ///
    /// # Errors
    /// [`RuntimeError::UnableToSimplify`] when a pass makes no progress on a
    /// tree that is not yet a literal, plus any folding error.
    pub fn reduce_to_literal(&self,
                             expr: &Expr,
                             suffix: &str,
                             steps: &mut Vec<String>)
                             -> EvalResult<Quantity> {
        steps.push(format!("{expr}{suffix}"));
        let mut current = expr.clone();

        loop {
            if let Expr::Literal(value) = current {
                return Ok(value);
            }
            let (next, progressed) = self.reduce_layer(&current)?;
            if !progressed {
                return Err(RuntimeError::UnableToSimplify { expression: current.to_string() });
            }
            let step = format!("{next}{suffix}");
            if steps.last() != Some(&step) {
                debug!(step = %step, "reduction step");
                steps.push(step);
            }
            current = next;
        }
    }
}

fn money(amount: f64, currency: &str) -> Quantity {
    Quantity::Money { amount:   round_to_cents(amount),
                      currency: currency.to_string(), }
}
