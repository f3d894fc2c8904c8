//! Whitespace and comment skipping.
//!
//! `//…\n` and non-nesting `/*…*/` comments are skipped silently; neither
//! produces a token.

use crate::error::{LexError, LexResult};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            while !self.cursor.is_at_end() && self.cursor.current_char().is_ascii_whitespace() {
                self.cursor.advance();
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
                continue;
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment()?;
                continue;
            }

            break;
        }
        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) -> LexResult<()> {
        let start = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // consume '/'
        self.cursor.advance(); // consume '*'
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::InvalidInputForState {
                    character: '\0',
                    state: "BLOCK_COMMENT",
                    span: c0_util::Span::new(start, self.cursor.position(), start_line, start_column),
                });
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn line_comment_is_skipped() {
        let mut lexer = Lexer::new("// hello\nint");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::KwInt);
    }

    #[test]
    fn block_comment_is_skipped() {
        let mut lexer = Lexer::new("/* hello\nworld */int");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::KwInt);
    }

    #[test]
    fn unterminated_block_comment_errors() {
        let mut lexer = Lexer::new("/* unterminated");
        assert!(lexer.next_token().is_err());
    }
}
