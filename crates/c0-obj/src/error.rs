use thiserror::Error;

/// Errors raised by [`crate::object::ObjectModel`]'s own bookkeeping
/// invariants (not language-level analyzer errors — those live in `c0-sem`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectModelError {
    #[error("function `{0}` is already defined")]
    FunctionAlreadyExists(String),

    #[error("function `{0}` is not defined")]
    FunctionNotFound(String),

    #[error("instruction index {index} out of bounds (stream has {len} instructions)")]
    InstructionIndexOutOfBounds { index: usize, len: usize },
}

pub type ObjectModelResult<T> = std::result::Result<T, ObjectModelError>;
