use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Applies a prefix sign to an already evaluated operand.
    ///
    /// - `Plus`: the identity.
    /// - `Negate`: arithmetic negation; negating `i64::MIN` overflows.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5).unwrap(), -5);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -5).unwrap(), -5);
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, i64::MIN).is_err());
    /// ```
    pub const fn eval_unary(op: UnaryOperator, operand: i64) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(operand),
            UnaryOperator::Negate => match operand.checked_neg() {
                Some(value) => Ok(value),
                None => Err(RuntimeError::UnaryOverflow { op, operand }),
            },
        }
    }
}
