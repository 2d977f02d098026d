/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning a line of text into a
/// tree: characters outside the alphabet, oversized literals, and token
/// sequences that do not match the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division by
/// zero and integer overflow.
pub mod runtime_error;

pub use parse_error::{Expected, ParseError};
pub use runtime_error::RuntimeError;

/// Broad classification of a failed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised by the lexer.
    InvalidCharacter,
    /// Raised by the parser.
    Syntax,
    /// Raised by the evaluator.
    Arithmetic,
}

/// The single failure value returned for a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Classifies the error by the phase that raised it.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ErrorKind, evaluate_line};
    ///
    /// let err = evaluate_line("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::InvalidCharacter,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(_) => ErrorKind::Arithmetic,
        }
    }
}
