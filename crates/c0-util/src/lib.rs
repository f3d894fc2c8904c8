//! c0-util - Core utilities and foundation types shared across the compiler.
//!
//! This crate provides the building blocks every other crate in the workspace
//! is built on: typed arena indices ([`Idx`] / [`IndexVec`]), interned
//! identifiers ([`Symbol`]), source location tracking ([`Span`] /
//! [`SourceMap`]), and diagnostic reporting ([`Handler`] /
//! [`DiagnosticBuilder`]). None of it is specific to C0 — it is the same
//! kind of infrastructure a typed-index arena, an interner, and a
//! `rustc`-style diagnostic renderer provide in any multi-pass compiler.
//!
//! # String interning
//!
//! Every identifier the tokenizer produces — a variable name, a function
//! name, a type keyword — is interned into a [`Symbol`], a 4-byte handle
//! into a global, thread-safe string table (see [`symbol`]). Interning
//! turns string comparison into index comparison and lets later passes pass
//! identifiers around by copy instead of by owned `String`.
//!
//! # Typed indices
//!
//! [`IndexVec<I, T>`] pairs a `Vec<T>` with a phantom index type `I: Idx`,
//! so a `RibId` can never be used to index a `Vec` of functions by mistake.
//! [`define_idx!`] generates the boilerplate for a new index type in one line.
//!
//! # Diagnostics
//!
//! [`diagnostic::DiagnosticBuilder`] is a fluent builder for compiler errors
//! and warnings; [`diagnostic::Handler`] collects them. [`span::SourceMap`]
//! renders a [`Span`] back to a `--> file:line:col` pointer with a caret
//! under the offending text, the same rendering the driver crate uses for
//! the `row/col`-tagged errors every compiler phase produces.

pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
