//! Y86-64 disassembler.
//!
//! Renders a decoded [`Instruction`] in the assembler's syntax for debug
//! tracing, logging, and test diagnostics.

use std::fmt;

use super::instruction::Instruction;
use crate::common::Reg;

/// Formats a `D(rB)` memory operand.
fn mem_operand(f: &mut fmt::Formatter<'_>, disp: i64, base: Option<Reg>) -> fmt::Result {
    match base {
        Some(b) => write!(f, "{disp}({b})"),
        None => write!(f, "{:#x}", disp as u64),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Halt => f.write_str("halt"),
            Self::Nop => f.write_str("nop"),
            Self::CondMove { cond, src, dst } => {
                if cond.suffix().is_empty() {
                    write!(f, "rrmovq {src}, {dst}")
                } else {
                    write!(f, "cmov{} {src}, {dst}", cond.suffix())
                }
            }
            Self::LoadImm { dst, value } => write!(f, "irmovq ${value}, {dst}"),
            Self::Store { src, base, disp } => {
                write!(f, "rmmovq {src}, ")?;
                mem_operand(f, disp, base)
            }
            Self::Load { dst, base, disp } => {
                f.write_str("mrmovq ")?;
                mem_operand(f, disp, base)?;
                write!(f, ", {dst}")
            }
            Self::Alu { op, src, dst } => write!(f, "{} {src}, {dst}", op.mnemonic()),
            Self::Jump { cond, target } => {
                let suffix = if cond.suffix().is_empty() { "mp" } else { cond.suffix() };
                write!(f, "j{suffix} {target:#x}")
            }
            Self::Call { target } => write!(f, "call {target:#x}"),
            Self::Ret => f.write_str("ret"),
            Self::Push { src } => write!(f, "pushq {src}"),
            Self::Pop { dst } => write!(f, "popq {dst}"),
        }
    }
}

/// Disassembles an instruction into a string.
pub fn disassemble(inst: &Instruction) -> String {
    inst.to_string()
}
