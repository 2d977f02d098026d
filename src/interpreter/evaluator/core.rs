use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a finished tree to a single integer.
///
/// The evaluator borrows the tree it walks and keeps no other state: each
/// call to [`Evaluator::evaluate`] performs one fresh depth-first, post-order
/// walk, left operand before right operand.
pub struct Evaluator<'ast> {
    root: &'ast Expr,
}

impl<'ast> Evaluator<'ast> {
    /// Creates an evaluator over the tree rooted at `root`.
    #[must_use]
    pub const fn new(root: &'ast Expr) -> Self {
        Self { root }
    }

    /// Evaluates the whole tree.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when a divisor evaluates to zero.
    /// - `RuntimeError::Overflow` / `RuntimeError::UnaryOverflow` when an
    ///   intermediate value leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{evaluator::core::Evaluator, parser::core::parse_line};
    ///
    /// let tree = parse_line("-7 / 2").unwrap();
    /// assert_eq!(Evaluator::new(&tree).evaluate().unwrap(), -4);
    /// ```
    pub fn evaluate(&self) -> EvalResult<i64> {
        Self::eval(self.root)
    }

    /// Evaluates one node and, recursively, its children.
    ///
    /// The match is exhaustive over [`Expr`], so a new node kind cannot be
    /// added without teaching the evaluator about it.
    pub fn eval(expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::UnaryOp { op, expr } => {
                let operand = Self::eval(expr)?;
                Self::eval_unary(*op, operand)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = Self::eval(left)?;
                let right = Self::eval(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }
}

/// Evaluates a tree in one call.
///
/// # Errors
/// See [`Evaluator::evaluate`].
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    Evaluator::new(expr).evaluate()
}
