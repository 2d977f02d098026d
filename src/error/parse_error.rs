use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind, e.g. the `)` closing a group or the end of input.
    Token(TokenKind),
    /// The start of an operand: a sign, an integer or an opening parenthesis.
    Operand,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Operand => write!(f, "an operand"),
        }
    }
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a character outside the calculator's alphabet.
    #[error("Error at offset {offset}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input line.
        offset:    usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("Error at offset {offset}: Integer literal is too large.")]
    LiteralTooLarge {
        /// Byte offset where the literal starts.
        offset: usize,
    },
    /// The token stream does not match the grammar.
    #[error("Error at offset {offset}: Expected {expected}, found {found}.")]
    Syntax {
        /// What the grammar required at this point.
        expected: Expected,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// Byte offset of the offending token.
        offset:   usize,
    },
}

impl ParseError {
    /// Byte offset in the input line where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. }
            | Self::LiteralTooLarge { offset }
            | Self::Syntax { offset, .. } => *offset,
        }
    }

    /// Returns `true` for errors raised by the lexer rather than the parser.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. } | Self::LiteralTooLarge { .. })
    }
}
