use c0_util::Span;
use thiserror::Error;

/// Parser errors, each anchored to the span of the offending (or expected)
/// token.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown variable type {found:?} at {span:?}")]
    UnknownVariableType { found: String, span: Span },

    #[error("expected a type specifier at {span:?}")]
    ExpectedTypeSpecifier { span: Span },

    #[error("expected {symbol} at {span:?}")]
    ExpectedSymbol { symbol: &'static str, span: Span },

    #[error("expected a character literal at {span:?}")]
    ExpectedCharLiteral { span: Span },

    #[error("expected a string literal at {span:?}")]
    ExpectedStrLiteral { span: Span },

    #[error("expected a float literal at {span:?}")]
    ExpectedFloatLiteral { span: Span },

    #[error("expected an int32 literal at {span:?}")]
    ExpectedInt32 { span: Span },

    #[error("expected an identifier at {span:?}")]
    ExpectedIdentifier { span: Span },

    #[error("invalid function definition at {span:?}")]
    InvalidFunctionDefinition { span: Span },

    #[error("invalid statement at {span:?}")]
    InvalidStatement { span: Span },

    #[error("invalid expression at {span:?}")]
    InvalidExpression { span: Span },

    #[error("invalid if statement at {span:?}")]
    InvalidIfStatement { span: Span },

    #[error("invalid switch statement at {span:?}")]
    InvalidSwitchStatement { span: Span },

    #[error("missing semicolon at {span:?}")]
    MissingSemicolon { span: Span },

    #[error("unexpected end of token stream")]
    UnexpectedEof,
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnknownVariableType { span, .. }
            | ParseError::ExpectedTypeSpecifier { span }
            | ParseError::ExpectedSymbol { span, .. }
            | ParseError::ExpectedCharLiteral { span }
            | ParseError::ExpectedStrLiteral { span }
            | ParseError::ExpectedFloatLiteral { span }
            | ParseError::ExpectedInt32 { span }
            | ParseError::ExpectedIdentifier { span }
            | ParseError::InvalidFunctionDefinition { span }
            | ParseError::InvalidStatement { span }
            | ParseError::InvalidExpression { span }
            | ParseError::InvalidIfStatement { span }
            | ParseError::InvalidSwitchStatement { span }
            | ParseError::MissingSemicolon { span } => Some(*span),
            ParseError::UnexpectedEof => None,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
