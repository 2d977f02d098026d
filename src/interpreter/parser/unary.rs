use crate::{
    ast::{Expr, UnaryOperator},
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a signed operand, an integer or a parenthesized group.
    ///
    /// Prefix signs are right-associative and may repeat, so `--5` becomes
    /// `UnaryOp(-, UnaryOp(-, 5))`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INTEGER
    ///             | "(" expr ")"
    /// ```
    ///
    /// # Errors
    /// `ParseError::Syntax` expecting an operand when the lookahead cannot
    /// start one.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current {
            Token { kind: TokenKind::Plus, .. } => self.parse_signed(UnaryOperator::Plus),
            Token { kind: TokenKind::Minus, .. } => self.parse_signed(UnaryOperator::Negate),
            Token { kind: TokenKind::Integer,
                    value: Some(value),
                    .. } => {
                self.consume(TokenKind::Integer)?;
                Ok(Expr::number(value))
            },
            Token { kind: TokenKind::LParen, .. } => self.parse_grouping(),
            Token { kind, offset, .. } => Err(ParseError::Syntax { expected: Expected::Operand,
                                                                    found: kind,
                                                                    offset }),
        }
    }

    fn parse_signed(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        self.consume(self.current.kind)?;
        let expr = self.parse_factor()?;
        Ok(Expr::unary(op, expr))
    }

    /// Parses `"(" expr ")"` and returns the inner expression; the group
    /// itself leaves no node in the tree.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.consume(TokenKind::LParen)?;
        let inner = self.parse_expr()?;
        self.consume(TokenKind::RParen)?;
        Ok(inner)
    }
}
