//! # intcalc
//!
//! intcalc is a line-oriented integer calculator written in Rust.
//! Each line goes through a lexer, a recursive-descent parser that builds an
//! abstract syntax tree, and a tree-walking evaluator that reduces the tree to
//! a single `i64`. Lines are independent; nothing survives from one line to
//! the next.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Evaluator,
    lexer::Lexer,
    parser::core::Parser,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types. The tree is
/// built by the parser and walked by the evaluator; it has exactly three node
/// kinds (integers, prefix signs and binary operations) and every child is
/// exclusively owned by its parent.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure aborts the current line and surfaces as one [`Error`] value
/// carrying the offending character, token kinds or operands.
pub mod error;
/// Orchestrates the per-line pipeline.
///
/// # Responsibilities
/// - Tokenizes a line on demand (`lexer`).
/// - Builds a tree with precedence and associativity encoded (`parser`).
/// - Reduces the tree to an integer (`evaluator`).
pub mod interpreter;
/// The interactive read-loop and the line renderer shared with the binary.
pub mod repl;
/// General numeric helpers.
pub mod util;

pub use error::{Error, ErrorKind};

/// Evaluates one line of text and returns its integer value.
///
/// A fresh lexer, parser and tree are built for each call. The first error
/// raised by any phase aborts the line and is returned as-is.
///
/// # Errors
/// - `ErrorKind::InvalidCharacter` for characters outside `0-9 + - * / ( )`
///   and whitespace, or for literals too large for `i64`.
/// - `ErrorKind::Syntax` for malformed expressions.
/// - `ErrorKind::Arithmetic` for division by zero or overflow.
///
/// # Examples
/// ```
/// use intcalc::{ErrorKind, evaluate_line};
///
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate_line("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(evaluate_line("-7 / 2").unwrap(), -4);
///
/// let err = evaluate_line("1 + @").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
/// ```
pub fn evaluate_line(source: &str) -> Result<i64, Error> {
    let result = run_pipeline(source);

    match &result {
        Ok(value) => tracing::debug!(value, "evaluated line"),
        Err(e) => tracing::debug!(error = %e, kind = ?e.kind(), "line failed"),
    }

    result
}

fn run_pipeline(source: &str) -> Result<i64, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let root = parser.parse()?;
    tracing::debug!(tree = %root, depth = root.depth(), "parsed line");

    Ok(Evaluator::new(&root).evaluate()?)
}
