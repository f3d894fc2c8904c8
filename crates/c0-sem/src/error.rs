//! Error taxonomies for the symbol table and the analyzer. Every variant
//! carries the `Span` of the construct that triggered it; nothing here is
//! recoverable, matching the parser's fail-fast policy.

use c0_util::Span;
use thiserror::Error;

/// Errors raised by [`crate::symbol_table::SymbolTable`]'s own bookkeeping.
/// Distinct from [`SemaError`]: these are lookup/shape failures against the
/// scope stack itself, not language-level semantic violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol `{0}` not found in any enclosing scope")]
    SymbolNotFound(String),

    #[error("symbol `{0}` has no recorded type")]
    SymbolWithoutType(String),

    #[error("function `{0}` has no stack offset")]
    FunctionTypeHasNoOffsetAttribute(String),

    #[error("`{0}` is already declared in this scope")]
    DuplicateSymbol(String),
}

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Semantic errors raised while walking the AST and emitting p-code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemaError {
    #[error("`{name}` is const and must be initialized at {span:?}")]
    ConstantNotInitialized { name: String, span: Span },

    #[error("`{name}` is already declared in this scope at {span:?}")]
    DuplicateSymbol { name: String, span: Span },

    #[error("`{name}` is not defined at {span:?}")]
    UndefinedSymbol { name: String, span: Span },

    #[error("function `{name}` does not return a value on every path at {span:?}")]
    NoReturnValueForNotVoidFunction { name: String, span: Span },

    #[error("void function `{name}` cannot return a value at {span:?}")]
    ReturnValueForVoidFunction { name: String, span: Span },

    #[error("`{name}` is a variable, not a function, at {span:?}")]
    NotCallingFunction { name: String, span: Span },

    #[error("function `{name}` is not defined at {span:?}")]
    FunctionNotDefined { name: String, span: Span },

    #[error("function `{name}` is already defined at {span:?}")]
    FunctionRedefinitionException { name: String, span: Span },

    #[error("program has no `main` function")]
    MissingMain,

    #[error("cannot assign to const `{name}` at {span:?}")]
    AssignToConstant { name: String, span: Span },

    #[error("`{name}` expects {expected} argument(s), found {found} at {span:?}")]
    ArgumentsNumberNotMatchException {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("variable `{name}` cannot have type void at {span:?}")]
    VoidVariableException { name: String, span: Span },

    #[error("unknown type `{found}` at {span:?}")]
    UnknownVariableType { found: String, span: Span },

    #[error("operand of type void at {span:?}")]
    VoidTypeCalculationNotSupported { span: Span },

    #[error("`{feature}` is not supported at {span:?}")]
    NotSupportedFeature { feature: String, span: Span },

    #[error(transparent)]
    Symbol(#[from] SymbolError),
}

impl SemaError {
    /// The span to point at when rendering this error, if any — `MissingMain`
    /// has no single offending location.
    pub fn span(&self) -> Option<Span> {
        match self {
            SemaError::ConstantNotInitialized { span, .. }
            | SemaError::DuplicateSymbol { span, .. }
            | SemaError::UndefinedSymbol { span, .. }
            | SemaError::NoReturnValueForNotVoidFunction { span, .. }
            | SemaError::ReturnValueForVoidFunction { span, .. }
            | SemaError::NotCallingFunction { span, .. }
            | SemaError::FunctionNotDefined { span, .. }
            | SemaError::FunctionRedefinitionException { span, .. }
            | SemaError::AssignToConstant { span, .. }
            | SemaError::ArgumentsNumberNotMatchException { span, .. }
            | SemaError::VoidVariableException { span, .. }
            | SemaError::UnknownVariableType { span, .. }
            | SemaError::VoidTypeCalculationNotSupported { span }
            | SemaError::NotSupportedFeature { span, .. } => Some(*span),
            SemaError::MissingMain => None,
            SemaError::Symbol(_) => None,
        }
    }
}

pub type SemaResult<T> = std::result::Result<T, SemaError>;
