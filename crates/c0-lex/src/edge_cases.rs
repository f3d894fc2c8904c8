//! Edge case tests for the lexer, covering input shapes that are easy to
//! get wrong at state-machine boundaries rather than in the common case.

use crate::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source);
    lexer
        .all_tokens()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn only_whitespace_is_just_eof() {
    assert_eq!(kinds("   \n\t  \r\n"), vec![TokenKind::Eof]);
}

#[test]
fn only_comments_is_just_eof() {
    assert_eq!(kinds("// a line comment\n/* a block comment */"), vec![TokenKind::Eof]);
}

#[test]
fn maximal_munch_prefers_two_char_operators() {
    assert_eq!(
        kinds("a<=b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Le,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("a<b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Lt,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_immediately_followed_by_identifier_splits_at_digit_boundary() {
    // "1x" lexes as an integer literal (`1`) followed by an identifier
    // (`x`); the DFA does not treat a trailing letter as part of a decimal
    // integer once it has left the HEX_X state.
    let mut lexer = Lexer::new("1x");
    let first = lexer.next_token().unwrap();
    assert_eq!(first.kind, TokenKind::IntLiteral);
    let second = lexer.next_token().unwrap();
    assert_eq!(second.kind, TokenKind::Identifier);
    assert_eq!(second.literal, "x");
}

#[test]
fn consecutive_string_literals_do_not_merge() {
    assert_eq!(
        kinds("\"a\" \"b\""),
        vec![TokenKind::StringLiteral, TokenKind::StringLiteral, TokenKind::Eof]
    );
}

#[test]
fn keyword_prefix_identifier_is_not_a_keyword() {
    assert_eq!(kinds("intx"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("returning"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn single_char_tokens_back_to_back() {
    assert_eq!(
        kinds("(){}"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn crlf_line_endings_do_not_confuse_line_comments() {
    assert_eq!(kinds("// comment\r\nint"), vec![TokenKind::KwInt, TokenKind::Eof]);
}
