//! The token cursor: a flat index into a pre-lexed token slice, with one
//! token of lookahead and the ability to unread back to any earlier
//! position. Every grammar production in `items.rs`/`expr.rs`/`stmt.rs` is a
//! method on [`Parser`] that consumes tokens off this cursor.

use c0_lex::{Token, TokenKind};
use c0_util::Span;

use crate::ast::Ast;
use crate::error::{ParseError, ParseResult};

pub struct Parser<'t> {
    tokens: &'t [Token],
    idx: usize,
}

impl<'t> Parser<'t> {
    /// `tokens` is expected to end with a [`TokenKind::Eof`] sentinel, as
    /// produced by `Lexer::all_tokens`.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, idx: 0 }
    }

    pub(crate) fn peek_opt(&self) -> Option<&'t Token> {
        let token = &self.tokens[self.idx];
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }

    pub(crate) fn peek(&self) -> ParseResult<&'t Token> {
        self.peek_opt().ok_or(ParseError::UnexpectedEof)
    }

    pub(crate) fn next_opt(&mut self) -> Option<Token> {
        let token = self.peek_opt()?.clone();
        self.idx += 1;
        Some(token)
    }

    pub(crate) fn next(&mut self) -> ParseResult<Token> {
        self.next_opt().ok_or(ParseError::UnexpectedEof)
    }

    pub(crate) fn unread(&mut self) {
        debug_assert!(self.idx > 0, "cannot unread before the first token");
        self.idx -= 1;
    }

    /// Span of the token immediately before the cursor; used to anchor
    /// "expected X" errors raised at end-of-input.
    pub(crate) fn prev_span(&self) -> Span {
        if self.idx == 0 {
            Span::DUMMY
        } else {
            self.tokens[self.idx - 1].span
        }
    }

    pub(crate) fn current_span(&self) -> Span {
        self.tokens[self.idx].span
    }

    /// Consumes the next token if it has the expected `kind`, wrapping it in
    /// a `NodeKind::Token` leaf; otherwise raises `ExpectedSymbol`.
    pub(crate) fn assert_token(&mut self, kind: TokenKind, symbol: &'static str) -> ParseResult<Ast> {
        match self.peek_opt() {
            None => Err(ParseError::ExpectedSymbol {
                symbol,
                span: self.prev_span(),
            }),
            Some(token) if token.kind == kind => {
                let token = self.next()?;
                Ok(Ast::token_leaf(token))
            }
            Some(token) => Err(ParseError::ExpectedSymbol {
                symbol,
                span: token.span,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c0_lex::Lexer;

    #[test]
    fn peek_and_next_walk_the_stream() {
        let tokens = Lexer::new("int x").all_tokens().unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.peek().unwrap().kind, TokenKind::KwInt);
        parser.next().unwrap();
        assert_eq!(parser.peek().unwrap().kind, TokenKind::Identifier);
    }

    #[test]
    fn peek_at_eof_is_none() {
        let tokens = Lexer::new("").all_tokens().unwrap();
        let parser = Parser::new(&tokens);
        assert!(parser.peek_opt().is_none());
    }

    #[test]
    fn unread_restores_previous_token() {
        let tokens = Lexer::new("int x").all_tokens().unwrap();
        let mut parser = Parser::new(&tokens);
        parser.next().unwrap();
        parser.unread();
        assert_eq!(parser.peek().unwrap().kind, TokenKind::KwInt);
    }

    #[test]
    fn assert_token_consumes_matching_kind() {
        let tokens = Lexer::new(";").all_tokens().unwrap();
        let mut parser = Parser::new(&tokens);
        let leaf = parser.assert_token(TokenKind::Semicolon, ";").unwrap();
        assert!(leaf.token.is_some());
        assert!(parser.peek_opt().is_none());
    }

    #[test]
    fn assert_token_rejects_mismatch() {
        let tokens = Lexer::new("int").all_tokens().unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(parser.assert_token(TokenKind::Semicolon, ";").is_err());
    }
}
