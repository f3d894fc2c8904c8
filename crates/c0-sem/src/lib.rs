//! Semantic analyzer for C0: walks the `c0-par` AST once, checking names and
//! types as it goes, and emits p-code directly into a `c0-obj` object model.
//!
//! `symbol_table` holds the scope stack the analyzer consults for every
//! identifier; `types` holds the three primitive types' coercion and
//! promotion rules; `analysis` is the walk itself; `error` is the exhaustive
//! set of failures either layer can raise. There is no error recovery: the
//! first semantic violation aborts analysis, matching the parser's policy.

mod analysis;
mod error;
mod symbol_table;
mod types;

#[cfg(test)]
mod edge_cases;

pub use crate::analysis::generate;
pub use crate::error::{SemaError, SemaResult, SymbolError, SymbolResult};
pub use crate::symbol_table::SymbolTable;
