use intcalc::{
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Failed to lex {source:?}: {e}"))
                    .iter()
                    .map(|t| t.kind)
                    .collect()
}

#[test]
fn every_operator_and_parenthesis() {
    use TokenKind::{Divide, EndOfInput, LParen, Minus, Multiply, Plus, RParen};

    assert_eq!(kinds("+-*/()"), [Plus, Minus, Multiply, Divide, LParen, RParen, EndOfInput]);
}

#[test]
fn tokens_carry_values_and_offsets() {
    let tokens = tokenize("12 + (3*45)").unwrap();

    assert_eq!(tokens,
               [Token::integer(12, 0),
                Token::new(TokenKind::Plus, 3),
                Token::new(TokenKind::LParen, 5),
                Token::integer(3, 6),
                Token::new(TokenKind::Multiply, 7),
                Token::integer(45, 8),
                Token::new(TokenKind::RParen, 10),
                Token::new(TokenKind::EndOfInput, 11)]);
}

#[test]
fn digit_runs_are_maximal() {
    let tokens = tokenize("1234567890").unwrap();
    assert_eq!(tokens, [Token::integer(1_234_567_890, 0), Token::new(TokenKind::EndOfInput, 10)]);
}

#[test]
fn signs_are_separate_tokens() {
    let tokens = tokenize("-5").unwrap();
    assert_eq!(tokens,
               [Token::new(TokenKind::Minus, 0),
                Token::integer(5, 1),
                Token::new(TokenKind::EndOfInput, 2)]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t1 \r\n+\x0c2  "), kinds("1+2"));
    assert_eq!(kinds("   "), [TokenKind::EndOfInput]);
    assert_eq!(kinds(""), [TokenKind::EndOfInput]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("7 ");
    assert_eq!(lexer.next_token(), Ok(Token::integer(7, 0)));
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::EndOfInput, 2)));
    }
}

#[test]
fn invalid_character_reports_character_and_offset() {
    let mut lexer = Lexer::new("1+@");
    assert_eq!(lexer.next_token(), Ok(Token::integer(1, 0)));
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::Plus, 1)));
    assert_eq!(lexer.next_token(),
               Err(ParseError::InvalidCharacter { character: '@',
                                                  offset:    2, }));
}

#[test]
fn invalid_multibyte_character() {
    assert_eq!(tokenize("1 + é"),
               Err(ParseError::InvalidCharacter { character: 'é',
                                                  offset:    4, }));
}

#[test]
fn oversized_literal() {
    assert_eq!(tokenize("1 + 9223372036854775808"),
               Err(ParseError::LiteralTooLarge { offset: 4 }));
    assert!(tokenize("9223372036854775807").is_ok());
}

#[test]
fn iterator_stops_before_end_of_input() {
    let tokens: Vec<_> = Lexer::new("1 + 2").collect::<Result<_, _>>().unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::EndOfInput));
}

#[test]
fn iterator_stops_after_first_error() {
    let items: Vec<_> = Lexer::new("1 # 2 $").collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert_eq!(items[1],
               Err(ParseError::InvalidCharacter { character: '#',
                                                  offset:    2, }));
}

#[test]
fn cursor_offset_advances() {
    let mut lexer = Lexer::new("  42 +");
    assert_eq!(lexer.offset(), 0);
    lexer.next_token().unwrap();
    assert_eq!(lexer.offset(), 4);
    lexer.next_token().unwrap();
    assert_eq!(lexer.offset(), 6);
    assert_eq!(lexer.source(), "  42 +");
}

#[test]
fn token_display() {
    let rendered: Vec<_> = tokenize("3+(").unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(rendered,
               ["Token(INTEGER, 3)", "Token(PLUS, '+')", "Token(LPAREN, '(')", "Token(EOF, None)"]);
}
