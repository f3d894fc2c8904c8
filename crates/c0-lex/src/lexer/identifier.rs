//! Identifier and keyword lexing: `[A-Za-z][A-Za-z0-9]*`, with reserved
//! words resolved against a fixed keyword table.

use crate::error::LexResult;
use crate::token::{Token, TokenKind, TokenValue};

use super::core::{is_ident_continue, Lexer};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> LexResult<Token> {
        while !self.cursor.is_at_end() && is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let literal = self.cursor.slice_from(self.token_start);
        if let Some(kind) = TokenKind::keyword_from_str(literal) {
            return Ok(self.make_token(kind, TokenValue::None));
        }

        let symbol = self.intern_identifier(literal);
        Ok(self.make_token(TokenKind::Identifier, TokenValue::Ident(symbol)))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::{TokenKind, TokenValue};

    #[test]
    fn plain_identifier() {
        let mut lexer = Lexer::new("main");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, "main");
        assert!(matches!(token.value, TokenValue::Ident(_)));
    }

    #[test]
    fn identifier_with_digits() {
        let mut lexer = Lexer::new("x1y2");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, "x1y2");
    }

    #[test]
    fn reserved_word_is_not_identifier() {
        let mut lexer = Lexer::new("return");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::KwReturn);
    }

    #[test]
    fn identifier_stops_before_operator() {
        let mut lexer = Lexer::new("abc+1");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.literal, "abc");
    }
}
