//! Coercion and promotion rules for C0's three value types (`int`, `char`,
//! `double` — `void` only ever appears as a function return type).
//!
//! There is no inference here: every expression's type is already known by
//! the time it reaches these functions, computed bottom-up as the analyzer
//! walks the tree. This module only answers "what instruction(s), if any,
//! turn a value of type `from` into a value of type `to`" and "what's the
//! common type of a binary operator's two operands".

use c0_obj::{Instruction, Opcode, PrimitiveType};
use c0_util::Span;

use crate::error::{SemaError, SemaResult};

/// Maps a type-specifier's keyword text to the primitive type it names.
/// Returns `None` for anything that isn't one of the four C0 keywords.
pub fn from_type_specifier(name: &str) -> Option<PrimitiveType> {
    match name {
        "void" => Some(PrimitiveType::Void),
        "int" => Some(PrimitiveType::Int),
        "char" => Some(PrimitiveType::Char),
        "double" => Some(PrimitiveType::Double),
        _ => None,
    }
}

/// The instruction(s) needed to convert a value of type `from`, already on
/// the stack, to type `to`. Same-type coercion is a no-op.
pub fn coerce(from: PrimitiveType, to: PrimitiveType) -> Vec<Instruction> {
    use PrimitiveType::*;
    match (from, to) {
        (a, b) if a == b => vec![],
        (Int, Char) => vec![Instruction::nullary(Opcode::I2c)],
        (Int, Double) => vec![Instruction::nullary(Opcode::I2d)],
        (Char, Int) => vec![],
        (Char, Double) => vec![Instruction::nullary(Opcode::I2d)],
        (Double, Int) => vec![Instruction::nullary(Opcode::D2i)],
        (Double, Char) => vec![Instruction::nullary(Opcode::D2i), Instruction::nullary(Opcode::I2c)],
        (Void, _) | (_, Void) => unreachable!("void values never flow through coerce"),
    }
}

/// The type a binary arithmetic/relational operator's result takes, given
/// its two (already-evaluated) operand types: `char` promotes to `int`,
/// `int`/`double` mixing promotes to `double`. Rejects `void` operands.
pub fn promote(left: PrimitiveType, right: PrimitiveType, span: Span) -> SemaResult<PrimitiveType> {
    use PrimitiveType::*;
    if left == Void || right == Void {
        return Err(SemaError::VoidTypeCalculationNotSupported { span });
    }
    if left == Double || right == Double {
        Ok(Double)
    } else {
        Ok(Int)
    }
}
