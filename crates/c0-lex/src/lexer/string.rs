//! Character and string literal lexing.
//!
//! Both share the same escape grammar: `\\`, `\'`, `\"`, `\n`, `\r`, `\t`,
//! or `\xHH` (exactly two hex digits). A character literal holds exactly one
//! such char or escape between its quotes; a string literal holds zero or
//! more, excluding the unescaped quote character and raw control characters.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind, TokenValue};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_char(&mut self) -> LexResult<Token> {
        self.cursor.advance(); // opening '

        let value = self.lex_quoted_byte('\'')?;

        if self.cursor.current_char() != '\'' {
            return Err(LexError::InvalidInputForState {
                character: self.cursor.current_char(),
                state: "CHAR_ED",
                span: self.current_span(),
            });
        }
        self.cursor.advance(); // closing '

        Ok(self.make_token(TokenKind::CharLiteral, TokenValue::Char(value)))
    }

    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance(); // opening "

        let mut bytes = Vec::new();
        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(LexError::InvalidInputForState {
                    character: '\0',
                    state: "STR_VAL",
                    span: self.current_span(),
                });
            }
            if self.cursor.current_char() == '"' {
                self.cursor.advance();
                break;
            }
            bytes.push(self.lex_quoted_byte('"')?);
        }

        Ok(self.make_token(TokenKind::StringLiteral, TokenValue::Str(bytes)))
    }

    /// Reads a single source character, decoding an escape sequence if
    /// present, and returns its byte value. `closing_quote` is excluded from
    /// unescaped raw characters (the caller who owns that quote consumes it).
    fn lex_quoted_byte(&mut self, closing_quote: char) -> LexResult<u8> {
        let c = self.cursor.current_char();

        if c == '\\' {
            self.cursor.advance();
            let escape = self.cursor.current_char();
            let byte = match escape {
                '\\' => b'\\',
                '\'' => b'\'',
                '"' => b'"',
                'n' => b'\n',
                'r' => b'\r',
                't' => b'\t',
                'x' => {
                    self.cursor.advance();
                    let hi = self.cursor.current_char();
                    self.cursor.advance();
                    let lo = self.cursor.current_char();
                    let value = hex_pair(hi, lo).ok_or_else(|| LexError::IllegalEscapeSequence {
                        escape: 'x',
                        span: self.current_span(),
                    })?;
                    self.cursor.advance();
                    return Ok(value);
                }
                other => {
                    return Err(LexError::IllegalEscapeSequence {
                        escape: other,
                        span: self.current_span(),
                    })
                }
            };
            self.cursor.advance();
            return Ok(byte);
        }

        if c == closing_quote || c == '\n' || c.is_ascii_control() || self.cursor.is_at_end() {
            return Err(LexError::InvalidInputForState {
                character: c,
                state: "STR_VAL",
                span: self.current_span(),
            });
        }

        self.cursor.advance();
        Ok(c as u8)
    }
}

fn hex_pair(hi: char, lo: char) -> Option<u8> {
    let hi = hi.to_digit(16)?;
    let lo = lo.to_digit(16)?;
    Some(((hi << 4) | lo) as u8)
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::{TokenKind, TokenValue};

    #[test]
    fn simple_char_literal() {
        let mut lexer = Lexer::new("'a'");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::CharLiteral);
        assert_eq!(token.value, TokenValue::Char(b'a'));
    }

    #[test]
    fn escaped_newline_char_literal() {
        let mut lexer = Lexer::new("'\\n'");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.value, TokenValue::Char(b'\n'));
    }

    #[test]
    fn hex_escape_char_literal() {
        let mut lexer = Lexer::new("'\\x41'");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.value, TokenValue::Char(b'A'));
    }

    #[test]
    fn unterminated_char_literal_errors() {
        let mut lexer = Lexer::new("'ab'");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn simple_string_literal() {
        let mut lexer = Lexer::new("\"hello\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.value, TokenValue::Str(b"hello".to_vec()));
    }

    #[test]
    fn string_literal_with_escapes() {
        let mut lexer = Lexer::new("\"a\\tb\\n\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.value, TokenValue::Str(b"a\tb\n".to_vec()));
    }

    #[test]
    fn empty_string_literal() {
        let mut lexer = Lexer::new("\"\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.value, TokenValue::Str(Vec::new()));
    }

    #[test]
    fn unterminated_string_literal_errors() {
        let mut lexer = Lexer::new("\"abc");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn string_literal_cannot_span_newline() {
        let mut lexer = Lexer::new("\"abc\ndef\"");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn illegal_escape_sequence_errors() {
        let mut lexer = Lexer::new("\"\\q\"");
        assert!(matches!(
            lexer.next_token(),
            Err(crate::error::LexError::IllegalEscapeSequence { .. })
        ));
    }
}
