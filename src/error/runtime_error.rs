use crate::ast::{BinaryOperator, UnaryOperator};

/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A binary operation produced a value outside the `i64` range.
    #[error("Integer overflow while computing {left} {op} {right}.")]
    Overflow {
        /// Left operand.
        left:  i64,
        /// The operator that overflowed.
        op:    BinaryOperator,
        /// Right operand.
        right: i64,
    },
    /// A unary operation produced a value outside the `i64` range.
    #[error("Integer overflow while computing {op}({operand}).")]
    UnaryOverflow {
        /// The operator that overflowed.
        op:      UnaryOperator,
        /// The operand.
        operand: i64,
    },
}
