//! Property-based checks that the lexer never panics and always terminates
//! on arbitrary byte soup, and that it round-trips simple generated integer
//! literals exactly.

use c0_lex::{Lexer, TokenKind, TokenValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn never_panics_on_arbitrary_ascii(input in "[ -~\\n\\t]{0,200}") {
        let mut lexer = Lexer::new(&input);
        // Either it runs to completion or stops at an error; both are fine,
        // a panic is not.
        let _ = lexer.all_tokens();
    }

    #[test]
    fn decimal_integer_round_trips(n in 0i32..=i32::MAX) {
        let source = n.to_string();
        let mut lexer = Lexer::new(&source);
        let token = lexer.next_token().unwrap();
        prop_assert_eq!(token.kind, TokenKind::IntLiteral);
        prop_assert_eq!(token.value, TokenValue::Int(n));
    }

    #[test]
    fn identifier_like_strings_lex_as_single_identifier(s in "[a-zA-Z][a-zA-Z0-9]{0,15}") {
        // Skip reserved words; they lex as their keyword kind instead.
        prop_assume!(TokenKind::keyword_from_str(&s).is_none());
        let mut lexer = Lexer::new(&s);
        let token = lexer.next_token().unwrap();
        prop_assert_eq!(token.kind, TokenKind::Identifier);
        prop_assert_eq!(token.literal, s);
        let eof = lexer.next_token().unwrap();
        prop_assert!(eof.is_eof());
    }
}
