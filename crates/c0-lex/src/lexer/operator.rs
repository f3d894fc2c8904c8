//! Operator and punctuation lexing for the multi-character operators:
//! `< <= > >= == != =`. Everything else single-character is handled
//! directly by the dispatch table in `core.rs`.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind, TokenValue};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator(&mut self) -> LexResult<Token> {
        let c = self.cursor.current_char();
        self.cursor.advance();

        let kind = match c {
            '=' => {
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    TokenKind::Ne
                } else {
                    return Err(LexError::InvalidInputForState {
                        character: self.cursor.current_char(),
                        state: "EXCL",
                        span: self.current_span(),
                    });
                }
            }
            '<' => {
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            _ => unreachable!("lex_operator dispatched on non-operator character"),
        };

        Ok(self.make_token(kind, TokenValue::None))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn bare_assign() {
        let mut lexer = Lexer::new("=");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
    }

    #[test]
    fn double_equals() {
        let mut lexer = Lexer::new("==");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EqEq);
    }

    #[test]
    fn not_equals() {
        let mut lexer = Lexer::new("!=");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ne);
    }

    #[test]
    fn bare_exclamation_errors() {
        let mut lexer = Lexer::new("! x");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn less_and_less_equal() {
        let mut lexer = Lexer::new("< <=");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Lt);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Le);
    }

    #[test]
    fn greater_and_greater_equal() {
        let mut lexer = Lexer::new("> >=");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Gt);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ge);
    }
}
