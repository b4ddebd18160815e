use crate::presentation::format::format_number;

/// A literal quantity: a bare number or an amount of money.
///
/// Literals are the leaves of the currency AST and the values the literal
/// reduction folds subtrees into.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    /// A dimensionless number.
    Scalar(f64),
    /// An amount tagged with a lowercase currency code.
    Money {
        /// The amount, in units of `currency`.
        amount:   f64,
        /// Lowercase currency code such as `eur`.
        currency: String,
    },
}

impl Quantity {
    /// Creates a money literal, case-folding the currency code.
    ///
    /// ## Example
    /// ```
    /// use fermi::ast::Quantity;
    ///
    /// let q = Quantity::money(120.0, "USD");
    /// assert_eq!(q.currency(), Some("usd"));
    /// ```
    #[must_use]
    pub fn money(amount: f64, currency: &str) -> Self {
        Self::Money { amount,
                      currency: currency.to_lowercase() }
    }

    /// The numeric part of the quantity.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        match self {
            Self::Scalar(x) | Self::Money { amount: x, .. } => *x,
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

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "{}", format_number(*x, 0)),
            Self::Money { amount, currency } => {
                write!(f, "{}{currency}", format_money_amount(*amount))
            },
        }
    }
}

/// Formats a money amount as written in steps and displays.
///
/// Finite amounts use the shortest exact decimal form (`131.85`, `120`);
/// non-finite ones fall back to [`format_number`].
///
/// ## Example
/// ```
/// use fermi::ast::format_money_amount;
///
/// assert_eq!(format_money_amount(0.75), "0.75");
/// assert_eq!(format_money_amount(120.0), "120");
/// assert_eq!(format_money_amount(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_money_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return format_number(amount, 0);
    }
    // Avoid printing "-0".
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{amount}")
}

/// An abstract syntax tree node of the currency grammar.
///
/// Trees are immutable: the literal reduction builds new trees instead of
/// rewriting nodes in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal scalar or money value.
    Literal(Quantity),
    /// Placeholder for the value computed before a `to <currency>` clause.
    /// Only produced when parsing the tail that follows the clause.
    Base,
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Shorthand for a binary node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Shorthand for a negation node.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::UnaryOp { op:   UnaryOperator::Negate,
                        expr: Box::new(expr), }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Quantity> {
        match self {
            Self::Literal(q) => Some(q),
            _ => None,
        }
    }

    /// Whether any node of the tree is a `~` range.
    #[must_use]
    pub fn contains_range(&self) -> bool {
        match self {
            Self::Literal(_) | Self::Base => false,
            Self::UnaryOp { expr, .. } => expr.contains_range(),
            Self::BinaryOp { left, op, right } => {
                *op == BinaryOperator::Range || left.contains_range() || right.contains_range()
            },
        }
    }

    /// Replaces every [`Expr::Base`] placeholder with `value`.
    ///
    /// ## Example
    /// ```
    /// use fermi::ast::{BinaryOperator, Expr, Quantity};
    ///
    /// let tail = Expr::binary(Expr::Base, BinaryOperator::Mul, Expr::Literal(Quantity::Scalar(2.0)));
    /// let filled = tail.substitute_base(&Quantity::money(10.0, "pln"));
    /// assert_eq!(filled.to_string(), "10pln * 2");
    /// ```
    #[must_use]
    pub fn substitute_base(&self, value: &Quantity) -> Self {
        match self {
            Self::Base => Self::Literal(value.clone()),
            Self::Literal(_) => self.clone(),
            Self::UnaryOp { op, expr } => Self::UnaryOp { op:   *op,
                                                          expr: Box::new(expr.substitute_base(value)), },
            Self::BinaryOp { left, op, right } => Self::binary(left.substitute_base(value),
                                                               *op,
                                                               right.substitute_base(value)),
        }
    }

    fn needs_parens_as_operand(&self, parent: BinaryOperator, is_right: bool) -> bool {
        let Self::BinaryOp { op: child, .. } = self else {
            return false;
        };
        if *child == BinaryOperator::Range {
            return parent != BinaryOperator::Range || !is_right;
        }
        let (child_prec, parent_prec) = (child.precedence(), parent.precedence());
        if child_prec != parent_prec {
            return child_prec < parent_prec;
        }
        is_right != parent.is_right_associative()
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(q) => write!(f, "{q}"),
            Self::Base => write!(f, "base"),
            Self::UnaryOp { op, expr } => {
                let negative_literal = expr.as_literal().is_some_and(|q| q.amount() < 0.0);
                if matches!(**expr, Self::BinaryOp { .. }) || negative_literal {
                    write!(f, "{op}({expr})")
                } else {
                    write!(f, "{op}{expr}")
                }
            },
            Self::BinaryOp { left, op, right } => {
                if left.needs_parens_as_operand(*op, false) {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }
                write!(f, " {op} ")?;
                if right.needs_parens_as_operand(*op, true) {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Uncertain range (`~`)
    Range,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            Self::Range => 4,
        }
    }

    /// Only `~` groups to the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Range)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Range => "~",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
