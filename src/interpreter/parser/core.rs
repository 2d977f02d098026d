use crate::{
    ast::Expr,
    error::{Expected, ParseError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a single input line.
///
/// The parser holds exactly one token of lookahead and never backtracks:
/// every call to [`Parser::consume`] replaces the lookahead with the next
/// token from the bound [`Lexer`].
///
/// Grammar:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := ("+" | "-") factor
///             | INTEGER
///             | "(" expr ")"
/// ```
pub struct Parser<'source> {
    pub(in crate::interpreter::parser) lexer:   Lexer<'source>,
    pub(in crate::interpreter::parser) current: Token,
}

impl<'source> Parser<'source> {
    /// Binds the parser to `lexer` and reads the first lookahead token.
    ///
    /// # Errors
    /// Propagates a lexical error raised by the first token.
    pub fn new(mut lexer: Lexer<'source>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// The current lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Parses a full expression and requires the input to end right after it.
    ///
    /// # Returns
    /// The root of the tree.
    ///
    /// # Errors
    /// - `ParseError::Syntax` on any grammar violation, including trailing
    ///   tokens after a complete expression.
    /// - Lexical errors raised while fetching tokens.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("2 + 3 * 4")).unwrap();
    /// assert_eq!(parser.parse().unwrap().to_string(), "(2 + (3 * 4))");
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let root = self.parse_expr()?;
        self.consume(TokenKind::EndOfInput)?;
        Ok(root)
    }

    /// Consumes the lookahead if it has the `expected` kind and fetches the
    /// next token from the lexer.
    ///
    /// Consuming the end-of-input token is allowed; the lexer keeps returning
    /// it, so the lookahead stays at the end.
    ///
    /// # Returns
    /// The token that was consumed.
    ///
    /// # Errors
    /// - `ParseError::Syntax` naming `expected` and the actual kind.
    /// - Lexical errors raised while fetching the next token.
    pub fn consume(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if self.current.kind != expected {
            return Err(ParseError::Syntax { expected: Expected::Token(expected),
                                            found:    self.current.kind,
                                            offset:   self.current.offset, });
        }
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// Lexes and parses one line of text.
///
/// # Errors
/// Returns the first lexical or syntax error in the line.
///
/// # Example
/// ```
/// use intcalc::interpreter::parser::core::parse_line;
///
/// assert!(parse_line("(1 + 2").is_err());
/// assert_eq!(parse_line("--5").unwrap().to_string(), "(-(-5))");
/// ```
pub fn parse_line(source: &str) -> ParseResult<Expr> {
    Parser::new(Lexer::new(source))?.parse()
}
