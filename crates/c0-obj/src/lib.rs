//! c0-obj - The p-code object model: constant pool, instruction streams,
//! function table, and the `s0`/`o0` serializers.
//!
//! This crate owns everything downstream of analysis: `c0-sem` builds up an
//! [`ObjectModel`] by calling [`ObjectModel::emit`] and friends as it walks
//! the AST, then the driver calls [`serialize::to_s0`] or [`serialize::to_o0`]
//! once analysis succeeds. Nothing here performs file I/O or knows about
//! source spans — it is a pure data model plus two pure rendering functions.

pub mod constant;
pub mod error;
pub mod instruction;
pub mod object;
pub mod serialize;

pub use constant::{Constant, ConstantPool};
pub use error::{ObjectModelError, ObjectModelResult};
pub use instruction::{Instruction, Opcode};
pub use object::{FunctionInfo, ObjectModel, PrimitiveType};
pub use serialize::{to_o0, to_s0, MAGIC, VERSION};
