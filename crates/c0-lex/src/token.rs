//! Token and token-kind definitions.

use c0_util::{Span, Symbol};

/// The kind of a lexical token.
///
/// Reserved words get their own dedicated kind rather than being tagged as
/// `Identifier` with a keyword payload, so the parser never has to
/// string-compare to recognize `int`/`if`/`return`/etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,

    KwVoid,
    KwInt,
    KwChar,
    KwDouble,
    KwConst,
    KwStruct,
    KwIf,
    KwElse,
    KwWhile,
    KwReturn,
    KwSwitch,
    KwCase,
    KwDefault,
    KwBreak,
    KwContinue,
    KwDo,
    KwFor,
    KwPrint,
    KwScan,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Lt,
    Le,
    Gt,
    Ge,
    EqEq,
    Ne,

    Eof,
}

impl TokenKind {
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        Some(match s {
            "void" => TokenKind::KwVoid,
            "int" => TokenKind::KwInt,
            "char" => TokenKind::KwChar,
            "double" => TokenKind::KwDouble,
            "const" => TokenKind::KwConst,
            "struct" => TokenKind::KwStruct,
            "if" => TokenKind::KwIf,
            "else" => TokenKind::KwElse,
            "while" => TokenKind::KwWhile,
            "return" => TokenKind::KwReturn,
            "switch" => TokenKind::KwSwitch,
            "case" => TokenKind::KwCase,
            "default" => TokenKind::KwDefault,
            "break" => TokenKind::KwBreak,
            "continue" => TokenKind::KwContinue,
            "do" => TokenKind::KwDo,
            "for" => TokenKind::KwFor,
            "print" => TokenKind::KwPrint,
            "scan" => TokenKind::KwScan,
            _ => return None,
        })
    }

    pub fn is_type_specifier(self) -> bool {
        matches!(
            self,
            TokenKind::KwVoid | TokenKind::KwInt | TokenKind::KwChar | TokenKind::KwDouble
        )
    }
}

/// The decoded literal value carried by a token, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i32),
    Float(f64),
    Char(u8),
    Str(Vec<u8>),
    Ident(Symbol),
    None,
}

/// A single lexical token.
///
/// `literal` is always the exact source slice the token was lexed from,
/// byte-for-byte, independent of any escape-sequence decoding recorded in
/// `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub literal: String,
    pub kind: TokenKind,
    pub span: Span,
    pub value: TokenValue,
}

impl Token {
    pub fn new(literal: impl Into<String>, kind: TokenKind, span: Span, value: TokenValue) -> Self {
        Self {
            literal: literal.into(),
            kind,
            span,
            value,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
