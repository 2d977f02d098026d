use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Lexemes recognized by the underlying `logos` automaton.
///
/// Whitespace is matched and skipped here; the end of input is never produced
/// by the automaton and is synthesized by [`Lexer::next_token`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
enum Lexeme {
    /// Integer literal tokens, such as `42`. Signs are parsed as unary
    /// operators, never as part of the literal.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Failures reported by the `logos` automaton.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum LexError {
    /// No lexeme matches at the cursor.
    #[default]
    InvalidCharacter,
    /// A digit run overflowed `i64`.
    LiteralTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// The slice is a non-empty run of ASCII digits, so the only possible failure
/// is overflow.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A non-negative integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The end of the input line.
    EndOfInput,
}

impl TokenKind {
    /// Upper-case name used when dumping token streams, e.g. `INTEGER`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::Divide => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A lexical token: a minimal meaningful unit of the input line.
///
/// Tokens are immutable values. `value` is `Some` only for
/// [`TokenKind::Integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The literal's value, for integer tokens.
    pub value:  Option<i64>,
    /// Byte offset of the token's first character. The end-of-input token
    /// sits at the length of the input.
    pub offset: usize,
}

impl Token {
    /// Creates a payload-free token.
    #[must_use]
    pub const fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind,
               value: None,
               offset }
    }

    /// Creates an integer-literal token.
    #[must_use]
    pub const fn integer(value: i64, offset: usize) -> Self {
        Self { kind: TokenKind::Integer,
               value: Some(value),
               offset }
    }

    const fn from_lexeme(lexeme: Lexeme, offset: usize) -> Option<Self> {
        let kind = match lexeme {
            Lexeme::Integer(value) => return Some(Self::integer(value, offset)),
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Minus => TokenKind::Minus,
            Lexeme::Star => TokenKind::Multiply,
            Lexeme::Slash => TokenKind::Divide,
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::Ignored => return None,
        };
        Some(Self::new(kind, offset))
    }
}

/// Formats as `Token(INTEGER, 3)`, `Token(PLUS, '+')` or `Token(EOF, None)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match (self.kind, self.value) {
            (_, Some(value)) => write!(f, "Token({name}, {value})"),
            (TokenKind::EndOfInput, None) => write!(f, "Token({name}, None)"),
            (kind, None) => write!(f, "Token({name}, {kind})"),
        }
    }
}

/// Produces tokens one at a time from a single input line.
///
/// The cursor only moves forward. Once the input is exhausted every further
/// call to [`Lexer::next_token`] returns the end-of-input token again.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Lexeme>,
    done:  bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Lexeme::lexer(source),
               done:  false, }
    }

    /// The text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    /// Byte offset just past the last consumed character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.inner.span().end
    }

    /// Returns the next token, skipping any leading whitespace.
    ///
    /// # Errors
    /// - `ParseError::InvalidCharacter` if the character at the cursor is not
    ///   a digit, an operator, a parenthesis or whitespace.
    /// - `ParseError::LiteralTooLarge` if a digit run does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new(" 12+");
    /// assert_eq!(lexer.next_token().unwrap().value, Some(12));
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Plus);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> ParseResult<Token> {
        loop {
            let Some(lexeme) = self.inner.next() else {
                return Ok(Token::new(TokenKind::EndOfInput, self.source().len()));
            };

            let offset = self.inner.span().start;
            let token = match lexeme {
                Ok(lexeme) => match Token::from_lexeme(lexeme, offset) {
                    Some(token) => token,
                    None => continue,
                },
                Err(LexError::InvalidCharacter) => {
                    let character = self.source()
                                        .get(offset..)
                                        .and_then(|rest| rest.chars().next())
                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(ParseError::InvalidCharacter { character, offset });
                },
                Err(LexError::LiteralTooLarge) => {
                    return Err(ParseError::LiteralTooLarge { offset });
                },
            };

            tracing::trace!(%token, "lexed");
            return Ok(token);
        }
    }
}

/// Yields every token before the end of input, then stops. A lexical error is
/// yielded once and ends the iteration.
impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            },
        }
    }
}

/// Tokenizes a whole line up front, including the trailing end-of-input token.
///
/// # Errors
/// Returns the first lexical error in the line.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("(1)").unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LParen, TokenKind::Integer, TokenKind::RParen, TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Lexer::new(source).collect::<ParseResult<Vec<_>>>()?;
    tokens.push(Token::new(TokenKind::EndOfInput, source.len()));
    Ok(tokens)
}
