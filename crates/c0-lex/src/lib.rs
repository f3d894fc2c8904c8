//! Lexical analysis for C0.
//!
//! Source text goes in, a stream of [`Token`]s comes out. The lexer is a
//! straightforward hand-written DFA: one character of lookahead is enough
//! for every token shape in the grammar (multi-character operators and
//! number literals included), so there is no backtracking and no separate
//! maximal-munch pass.
//!
//! ```
//! use c0_lex::Lexer;
//!
//! let mut lexer = Lexer::new("int main() { return 0; }");
//! let tokens = lexer.all_tokens().unwrap();
//! assert_eq!(tokens.len(), 9); // includes the trailing Eof
//! ```

mod cursor;
mod error;
mod lexer;
mod token;

pub use crate::cursor::Cursor;
pub use crate::error::{LexError, LexResult};
pub use crate::lexer::Lexer;
pub use crate::token::{Token, TokenKind, TokenValue};

#[cfg(test)]
mod edge_cases;
