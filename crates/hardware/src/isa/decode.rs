//! Y86-64 Instruction Decoder.
//!
//! This module turns the bytes at a program counter into an [`Instruction`].
//! It performs:
//! 1. **Fetch:** Reads the opcode byte, the optional register byte, and the
//!    optional 8-byte constant, failing with `InvalidAddress` if any of them
//!    lies outside memory.
//! 2. **Validation:** Rejects unknown classes, unknown function codes, and
//!    "no register" in an operand slot with `InvalidInstruction`.
//! 3. **PC Computation:** Reports the address of the following instruction.
//!
//! Decoding never mutates memory or architectural state.

use super::instruction::{AluOp, Cond, Instruction, encoded_len, has_const_word, has_reg_byte};
use super::opcodes::{
    I_CALL, I_HALT, I_IRMOVQ, I_JXX, I_MRMOVQ, I_NOP, I_OPQ, I_POPQ, I_PUSHQ, I_RET, I_RMMOVQ,
    I_RRMOVQ,
};
use crate::common::Fault;
use crate::common::constants::{NIBBLE_MASK, NIBBLE_SHIFT, REG_NONE};
use crate::common::reg::Reg;
use crate::soc::memory::Memory;

/// Result of decoding one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded instruction.
    pub inst: Instruction,
    /// Address of the instruction.
    pub pc: u64,
    /// Address immediately after the instruction (`valP`).
    pub next_pc: u64,
}

/// Raw fields pulled out of the instruction bytes before validation.
struct Fields {
    pc: u64,
    byte0: u8,
    ifun: u8,
    ra: u8,
    rb: u8,
    val_c: u64,
}

impl Fields {
    fn invalid(&self) -> Fault {
        Fault::InvalidInstruction {
            pc: self.pc,
            byte: self.byte0,
        }
    }

    /// `rA` as a required operand.
    fn ra(&self) -> Result<Reg, Fault> {
        Reg::from_nibble(self.ra).ok_or_else(|| self.invalid())
    }

    /// `rB` as a required operand.
    fn rb(&self) -> Result<Reg, Fault> {
        Reg::from_nibble(self.rb).ok_or_else(|| self.invalid())
    }

    fn cond(&self) -> Result<Cond, Fault> {
        Cond::from_funct(self.ifun).ok_or_else(|| self.invalid())
    }
}

/// Decodes the instruction at `pc`.
///
/// # Arguments
///
/// * `mem` - Memory to fetch from.
/// * `pc` - Address of the first instruction byte.
///
/// # Returns
///
/// The decoded instruction and its fall-through address, or the fault the
/// fetch or validation raised.
pub fn decode(mem: &Memory, pc: u64) -> Result<Decoded, Fault> {
    let byte0 = mem.read_byte(pc)?;
    let icode = byte0 >> NIBBLE_SHIFT;
    let ifun = byte0 & NIBBLE_MASK;

    let len = encoded_len(icode).ok_or(Fault::InvalidInstruction { pc, byte: byte0 })?;

    let mut cursor = pc + 1;
    let (ra, rb) = if has_reg_byte(icode) {
        let regs = mem.read_byte(cursor)?;
        cursor += 1;
        (regs >> NIBBLE_SHIFT, regs & NIBBLE_MASK)
    } else {
        (REG_NONE, REG_NONE)
    };
    let val_c = if has_const_word(icode) {
        mem.read_word(cursor)?
    } else {
        0
    };

    let f = Fields {
        pc,
        byte0,
        ifun,
        ra,
        rb,
        val_c,
    };

    let inst = match icode {
        I_HALT => Instruction::Halt,
        I_NOP => Instruction::Nop,
        I_RRMOVQ => Instruction::CondMove {
            cond: f.cond()?,
            src: f.ra()?,
            dst: f.rb()?,
        },
        I_IRMOVQ => Instruction::LoadImm {
            dst: f.rb()?,
            value: f.val_c as i64,
        },
        I_RMMOVQ => Instruction::Store {
            src: f.ra()?,
            base: Reg::from_nibble(f.rb),
            disp: f.val_c as i64,
        },
        I_MRMOVQ => Instruction::Load {
            dst: f.ra()?,
            base: Reg::from_nibble(f.rb),
            disp: f.val_c as i64,
        },
        I_OPQ => Instruction::Alu {
            op: AluOp::from_funct(f.ifun).ok_or_else(|| f.invalid())?,
            src: f.ra()?,
            dst: f.rb()?,
        },
        I_JXX => Instruction::Jump {
            cond: f.cond()?,
            target: f.val_c,
        },
        I_CALL => Instruction::Call { target: f.val_c },
        I_RET => Instruction::Ret,
        I_PUSHQ => Instruction::Push { src: f.ra()? },
        I_POPQ => Instruction::Pop { dst: f.ra()? },
        _ => return Err(f.invalid()),
    };

    Ok(Decoded {
        inst,
        pc,
        next_pc: pc + len,
    })
}
