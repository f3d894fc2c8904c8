//! Core lexer implementation: the `Lexer` struct and its dispatch table.

use c0_util::{FileId, Span, Symbol};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind, TokenValue};

/// Tokenizes C0 source text into a stream of [`Token`]s.
///
/// Implemented as an explicit state machine dispatching on the current
/// character: whitespace and comments are skipped before every token,
/// then the lexer routes to identifier/number/string/operator lexing based
/// on the first character of what remains.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    file_id: FileId,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_file_id(source, FileId::DUMMY)
    }

    pub fn with_file_id(source: &'a str, file_id: FileId) -> Self {
        Self {
            cursor: Cursor::new(source),
            file_id,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or a token of kind [`TokenKind::Eof`] at the
    /// end of the stream.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, TokenValue::None));
        }

        let c = self.cursor.current_char();
        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '=' | '!' | '<' | '>' => self.lex_operator(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if !c.is_ascii() || !is_printable_ascii(c) => {
                let span = self.current_span();
                self.cursor.advance();
                Err(LexError::InvalidCharacter { character: c, span })
            }
            c => {
                let span = self.current_span();
                self.cursor.advance();
                Err(LexError::IllegalSingleCharOp { character: c, span })
            }
        }
    }

    /// Eagerly collects every token up to and including `Eof`, or the first
    /// lexing error encountered.
    pub fn all_tokens(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn single(&mut self, kind: TokenKind) -> LexResult<Token> {
        self.cursor.advance();
        Ok(self.make_token(kind, TokenValue::None))
    }

    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
        .with_file_id(self.file_id)
    }

    pub(crate) fn make_token(&self, kind: TokenKind, value: TokenValue) -> Token {
        let literal = self.cursor.slice_from(self.token_start).to_string();
        Token::new(literal, kind, self.current_span(), value)
    }

    pub(crate) fn intern_identifier(&self, text: &str) -> Symbol {
        Symbol::intern(text)
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub(crate) fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c) || c == '\t' || c == '\n' || c == '\r'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
