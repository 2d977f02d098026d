/// Core evaluation logic.
///
/// Contains the evaluator, the tree walk and the evaluation result type.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix signs `+` and `-`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked addition, subtraction, multiplication and floor
/// division.
pub mod binary;
