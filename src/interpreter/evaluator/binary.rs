use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::checked_floor_div,
};

impl Evaluator<'_> {
    /// Applies a binary operator to two already evaluated operands.
    ///
    /// All operations are checked. Division rounds toward negative infinity,
    /// so `-7 / 2` is `-4` and `7 / -2` is `-4`.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if `op` is `Div` and `right` is zero.
    /// - `RuntimeError::Overflow` if the result does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 10, 2).unwrap(), 8);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, -7, 2).unwrap(), -4);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 5, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub const fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                checked_floor_div(left, right)
            },
        };

        match result {
            Some(value) => Ok(value),
            None => Err(RuntimeError::Overflow { left, op, right }),
        }
    }
}
