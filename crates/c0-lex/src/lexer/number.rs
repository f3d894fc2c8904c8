//! Number literal lexing: the integer/float DFA.
//!
//! States mirror the specification directly: `ZERO`, `NOT_ZERO_INTEGER`,
//! `HEX_X`, `HEX`, `FLOAT_DOT`, `FLOAT_HEAD`, `FLOAT_TAIL`,
//! `FLOAT_EXP_ST`/`FLOAT_EXP_SIGN`/`FLOAT_EXP_ED`.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind, TokenValue};

use super::core::Lexer;

#[derive(Clone, Copy, PartialEq, Eq)]
enum NumState {
    Zero,
    NotZeroInt,
    HexX,
    Hex,
    FloatDot,
    FloatHead,
    FloatTail,
    FloatExpSt,
    FloatExpSign,
    FloatExpEd,
}

impl<'a> Lexer<'a> {
    /// Entered with the cursor on the literal's first character: a decimal
    /// digit, or a `.` already confirmed (by the dispatch in `core.rs`) to
    /// be followed by a digit.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        let first = self.cursor.current_char();
        let mut state = if first == '.' {
            NumState::FloatDot
        } else if first == '0' {
            NumState::Zero
        } else {
            NumState::NotZeroInt
        };
        self.cursor.advance();

        loop {
            let c = self.cursor.current_char();
            let is_digit = c.is_ascii_digit();
            match state {
                NumState::Zero => {
                    if c == 'x' || c == 'X' {
                        state = NumState::HexX;
                        self.cursor.advance();
                    } else if is_digit {
                        state = NumState::FloatHead;
                        self.cursor.advance();
                    } else if c == '.' {
                        state = NumState::FloatDot;
                        self.cursor.advance();
                    } else if c == 'e' || c == 'E' {
                        state = NumState::FloatExpSt;
                        self.cursor.advance();
                    } else {
                        return self.finish_int_literal();
                    }
                }
                NumState::NotZeroInt => {
                    if c == '.' {
                        state = NumState::FloatDot;
                        self.cursor.advance();
                    } else if c == 'e' || c == 'E' {
                        state = NumState::FloatExpSt;
                        self.cursor.advance();
                    } else if is_digit {
                        self.cursor.advance();
                    } else {
                        return self.finish_int_literal();
                    }
                }
                NumState::HexX => {
                    if c.is_ascii_hexdigit() {
                        state = NumState::Hex;
                        self.cursor.advance();
                    } else {
                        return Err(self.invalid_input_for_state(c, "HEX_X"));
                    }
                }
                NumState::Hex => {
                    if c.is_ascii_hexdigit() {
                        self.cursor.advance();
                    } else {
                        return self.finish_hex_literal();
                    }
                }
                NumState::FloatDot => {
                    if is_digit {
                        state = NumState::FloatTail;
                        self.cursor.advance();
                    } else if c == 'e' || c == 'E' {
                        state = NumState::FloatExpSt;
                        self.cursor.advance();
                    } else {
                        return self.finish_float_literal();
                    }
                }
                NumState::FloatHead => {
                    if is_digit {
                        self.cursor.advance();
                    } else if c == '.' {
                        state = NumState::FloatDot;
                        self.cursor.advance();
                    } else if c == 'e' || c == 'E' {
                        state = NumState::FloatExpSt;
                        self.cursor.advance();
                    } else {
                        return Err(self.invalid_input_for_state(c, "FLOAT_HEAD"));
                    }
                }
                NumState::FloatTail => {
                    if is_digit {
                        self.cursor.advance();
                    } else if c == 'e' || c == 'E' {
                        state = NumState::FloatExpSt;
                        self.cursor.advance();
                    } else {
                        return self.finish_float_literal();
                    }
                }
                NumState::FloatExpSt => {
                    if c == '+' || c == '-' {
                        state = NumState::FloatExpSign;
                        self.cursor.advance();
                    } else if is_digit {
                        state = NumState::FloatExpEd;
                        self.cursor.advance();
                    } else {
                        return Err(self.invalid_input_for_state(c, "FLOAT_EXP_ST"));
                    }
                }
                NumState::FloatExpSign => {
                    if is_digit {
                        state = NumState::FloatExpEd;
                        self.cursor.advance();
                    } else {
                        return Err(self.invalid_input_for_state(c, "FLOAT_EXP_SIGN"));
                    }
                }
                NumState::FloatExpEd => {
                    if is_digit {
                        self.cursor.advance();
                    } else {
                        return self.finish_float_literal();
                    }
                }
            }
        }
    }

    fn invalid_input_for_state(&self, character: char, state: &'static str) -> LexError {
        LexError::InvalidInputForState {
            character,
            state,
            span: self.current_span(),
        }
    }

    fn finish_int_literal(&mut self) -> LexResult<Token> {
        let literal = self.cursor.slice_from(self.token_start);
        match literal.parse::<i32>() {
            Ok(value) => Ok(self.make_token(TokenKind::IntLiteral, TokenValue::Int(value))),
            Err(_) => Err(LexError::Integer32Overflow { span: self.current_span() }),
        }
    }

    fn finish_hex_literal(&mut self) -> LexResult<Token> {
        let literal = self.cursor.slice_from(self.token_start);
        let digits = &literal[2..]; // strip "0x"/"0X"
        match u32::from_str_radix(digits, 16) {
            Ok(bits) => Ok(self.make_token(TokenKind::IntLiteral, TokenValue::Int(bits as i32))),
            Err(_) => Err(LexError::Integer32Overflow { span: self.current_span() }),
        }
    }

    fn finish_float_literal(&mut self) -> LexResult<Token> {
        let literal = self.cursor.slice_from(self.token_start);
        match literal.parse::<f64>() {
            Ok(value) => Ok(self.make_token(TokenKind::FloatLiteral, TokenValue::Float(value))),
            Err(_) => Err(LexError::InvalidInputForState {
                character: '\0',
                state: "FLOAT_LITERAL",
                span: self.current_span(),
            }),
        }
    }
}
