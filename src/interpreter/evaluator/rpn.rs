use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        parser::shunting_yard::{Operator, RpnToken},
        value::uncertain::UncertainValue,
    },
};

impl Context {
    /// Evaluates an RPN queue into an uncertain value.
    ///
    /// Numbers push exact values, `NEG` negates the top of the stack, `~`
    /// samples a range and the arithmetic operators combine the two topmost
    /// values with interval and sample arithmetic.
    ///
    /// # Returns
    /// `None` for an empty queue.
    ///
    /// # Errors
    /// - [`RuntimeError::NotEnoughOperands`] when an operator underflows the
    ///   stack.
    /// - [`RuntimeError::OperandsLeftOver`] when more than one value remains.
    /// - [`RuntimeError::TypeError`] for range bounds that are not exact.
    ///
    /// # Example
    /// ```
    /// use fermi::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::tokenize,
    ///     parser::shunting_yard::to_rpn,
    /// };
    ///
    /// let rpn = to_rpn(&tokenize("((1-2)~3)").unwrap()).unwrap();
    /// let value = Context::default().eval_rpn(&rpn).unwrap().unwrap();
    /// assert_eq!((value.min, value.mean, value.max), (-1.0, 1.0, 3.0));
    /// ```
    pub fn eval_rpn(&mut self, rpn: &[RpnToken]) -> EvalResult<Option<UncertainValue>> {
        let mut stack: Vec<UncertainValue> = Vec::new();

        for token in rpn {
            match *token {
                RpnToken::Number(x) => stack.push(UncertainValue::exact(x)),
                RpnToken::Operator(op) => {
                    if stack.len() < op.arity() {
                        return Err(RuntimeError::NotEnoughOperands { operator: op.to_string() });
                    }
                    let value = if op == Operator::Neg {
                        let operand = pop(&mut stack, op)?;
                        operand.negate()
                    } else {
                        let right = pop(&mut stack, op)?;
                        let left = pop(&mut stack, op)?;
                        self.eval_rpn_binary(op, &left, &right)?
                    };
                    stack.push(value);
                },
            }
        }

        match stack.len() {
            0 => Ok(None),
            1 => Ok(stack.pop()),
            count => Err(RuntimeError::OperandsLeftOver { count }),
        }
    }

    fn eval_rpn_binary(&mut self,
                       op: Operator,
                       left: &UncertainValue,
                       right: &UncertainValue)
                       -> EvalResult<UncertainValue> {
        let binary = match op {
            Operator::Add => BinaryOperator::Add,
            Operator::Sub => BinaryOperator::Sub,
            Operator::Mul => BinaryOperator::Mul,
            Operator::Div => BinaryOperator::Div,
            Operator::Pow => BinaryOperator::Pow,
            Operator::Range => return self.sample_range(left, right),
            Operator::Neg => {
                return Err(RuntimeError::UnknownOperator { operator: op.to_string() });
            },
        };
        left.combine(binary, right, self.sample_count)
    }
}

fn pop(stack: &mut Vec<UncertainValue>, op: Operator) -> EvalResult<UncertainValue> {
    stack.pop()
         .ok_or_else(|| RuntimeError::NotEnoughOperands { operator: op.to_string() })
}
