//! Textual (`s0`) and binary (`o0`) serializers for an [`ObjectModel`].
//!
//! Both are pure functions of the model: no file I/O happens here, that is
//! the driver's job.

use byteorder::{BigEndian, WriteBytesExt};
use std::fmt::Write as _;
use std::io;

use crate::constant::Constant;
use crate::instruction::Instruction;
use crate::object::ObjectModel;

pub const MAGIC: u32 = 0x4330_3A29;
pub const VERSION: u32 = 1;

/// Render the model as `s0` textual assembly.
///
/// Section order: `.constants`, `.start`, `.functions` (the header table),
/// then one named section per function in declaration order.
pub fn to_s0(model: &ObjectModel) -> String {
    let mut out = String::new();

    out.push_str(".constants:\n");
    for (idx, constant) in model.constants.iter().enumerate() {
        let value = match constant {
            Constant::Str(s) => format!("\"{}\"", escape_for_s0(s)),
            Constant::Int(i) => i.to_string(),
            Constant::Double(d) => format!("{:?}", d),
        };
        let _ = writeln!(out, "    {:5} {} {}", idx, constant.type_letter(), value);
    }

    out.push_str(".start:\n");
    write_instructions(&mut out, &model.start_instructions, "    {:5} {}\n");

    out.push_str(".functions:\n");
    for (idx, func) in model.functions.iter().enumerate() {
        let _ = writeln!(
            out,
            "    {:>3} {:>3} {:>3} {:>3}",
            idx,
            func.name_idx,
            func.param_size(),
            1
        );
    }

    for func in &model.functions {
        let _ = writeln!(out, "{}:", func.name);
        write_instructions(&mut out, &func.instructions, "    {:>3} {}\n");
    }

    out
}

fn write_instructions(out: &mut String, instructions: &[Instruction], _fmt_hint: &str) {
    for (idx, inst) in instructions.iter().enumerate() {
        let _ = writeln!(out, "    {:>3} {}", idx, inst);
    }
}

fn escape_for_s0(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            '\n' => vec!['\\', 'n'],
            '\t' => vec!['\\', 't'],
            '\r' => vec!['\\', 'r'],
            other => vec![other],
        })
        .collect()
}

/// Render the model as a big-endian `o0` binary object.
///
/// Layout: `magic(u4) version(u4) constants_count(u2) Constant_info[]
/// start.instructions_count(u2) Instruction[] functions_count(u2)
/// Function_info[]`. See [`crate::MAGIC`]/[`crate::VERSION`].
pub fn to_o0(model: &ObjectModel) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();

    out.write_u32::<BigEndian>(MAGIC)?;
    out.write_u32::<BigEndian>(VERSION)?;

    out.write_u16::<BigEndian>(model.constants.len() as u16)?;
    for constant in model.constants.iter() {
        write_constant(&mut out, constant)?;
    }

    write_instruction_stream(&mut out, &model.start_instructions)?;

    out.write_u16::<BigEndian>(model.functions.len() as u16)?;
    for func in &model.functions {
        out.write_u16::<BigEndian>(func.name_idx)?;
        out.write_u16::<BigEndian>(func.param_size() as u16)?;
        out.write_u16::<BigEndian>(1)?; // level is always 1 in the base subset
        write_instruction_stream(&mut out, &func.instructions)?;
    }

    Ok(out)
}

fn write_constant(out: &mut Vec<u8>, constant: &Constant) -> io::Result<()> {
    out.write_u8(constant.type_tag())?;
    match constant {
        Constant::Str(s) => {
            out.write_u16::<BigEndian>(s.len() as u16)?;
            out.extend_from_slice(s.as_bytes());
        }
        Constant::Int(i) => out.write_i32::<BigEndian>(*i)?,
        Constant::Double(d) => out.write_f64::<BigEndian>(*d)?,
    }
    Ok(())
}

fn write_instruction_stream(out: &mut Vec<u8>, instructions: &[Instruction]) -> io::Result<()> {
    out.write_u16::<BigEndian>(instructions.len() as u16)?;
    for inst in instructions {
        out.write_u8(inst.opcode.code())?;
        for (operand, width) in inst.operands.iter().zip(inst.opcode.operand_sizes()) {
            match width {
                1 => out.write_u8(*operand as u8)?,
                2 => out.write_u16::<BigEndian>(*operand as u16)?,
                4 => out.write_i32::<BigEndian>(*operand as i32)?,
                other => unreachable!("no opcode declares a {}-byte operand", other),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Opcode;
    use crate::object::PrimitiveType;

    #[test]
    fn o0_header_is_magic_then_version() {
        let model = ObjectModel::new();
        let bytes = to_o0(&model).unwrap();
        assert_eq!(&bytes[0..4], &[0x43, 0x30, 0x3A, 0x29]);
        assert_eq!(&bytes[4..8], &[0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn o0_empty_model_has_zero_counts_after_header() {
        let model = ObjectModel::new();
        let bytes = to_o0(&model).unwrap();
        // constants_count, start.instructions_count, functions_count: all u2 zero.
        assert_eq!(&bytes[8..10], &[0x00, 0x00]);
        assert_eq!(&bytes[10..12], &[0x00, 0x00]);
        assert_eq!(&bytes[12..14], &[0x00, 0x00]);
        assert_eq!(bytes.len(), 14);
    }

    #[test]
    fn o0_encodes_int_constant_big_endian() {
        let mut model = ObjectModel::new();
        model.add_constant(Constant::Int(255));
        let bytes = to_o0(&model).unwrap();
        // constants_count(u2)=1, then type_tag(u1)=1, then i4 = 0x000000FF
        assert_eq!(&bytes[8..10], &[0x00, 0x01]);
        assert_eq!(bytes[10], 1);
        assert_eq!(&bytes[11..15], &[0x00, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn o0_encodes_string_constant_with_length_prefix() {
        let mut model = ObjectModel::new();
        model.add_constant(Constant::Str("main".to_string()));
        let bytes = to_o0(&model).unwrap();
        assert_eq!(bytes[10], 0);
        assert_eq!(&bytes[11..13], &[0x00, 0x04]);
        assert_eq!(&bytes[13..17], b"main");
    }

    #[test]
    fn s0_sections_appear_in_order() {
        let mut model = ObjectModel::new();
        model.add_constant(Constant::Str("main".to_string()));
        model
            .add_function(PrimitiveType::Int, "main", 0, vec![])
            .unwrap();
        model.emit(Opcode::Ipush, vec![0]);
        let text = to_s0(&model);
        let constants_pos = text.find(".constants:").unwrap();
        let start_pos = text.find(".start:").unwrap();
        let functions_pos = text.find(".functions:").unwrap();
        let main_pos = text.find("main:").unwrap();
        assert!(constants_pos < start_pos);
        assert!(start_pos < functions_pos);
        assert!(functions_pos < main_pos);
    }

    #[test]
    fn s0_quotes_string_constants() {
        let mut model = ObjectModel::new();
        model.add_constant(Constant::Str("hi".to_string()));
        let text = to_s0(&model);
        assert!(text.contains("S \"hi\""));
    }
}
