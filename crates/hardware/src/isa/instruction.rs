//! Decoded instruction representation.
//!
//! The decoder produces an [`Instruction`] value carrying exactly the
//! operands its class needs; the executor matches on it. Keeping the two
//! apart means decode can fail without touching architectural state.

use super::funct::{
    F_ADD, F_ALWAYS, F_AND, F_E, F_G, F_GE, F_L, F_LE, F_NE, F_SUB, F_XOR,
};
use super::opcodes::{
    I_CALL, I_HALT, I_IRMOVQ, I_JXX, I_MRMOVQ, I_NOP, I_OPQ, I_POPQ, I_PUSHQ, I_RET, I_RMMOVQ,
    I_RRMOVQ,
};
use crate::common::Reg;

/// Integer ALU operations selected by the `OPq` function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `valB + valA`
    Add,
    /// `valB - valA`
    Sub,
    /// `valB & valA`
    And,
    /// `valB ^ valA`
    Xor,
}

impl AluOp {
    /// Maps an `OPq` function code to an operation.
    pub const fn from_funct(ifun: u8) -> Option<Self> {
        match ifun {
            F_ADD => Some(Self::Add),
            F_SUB => Some(Self::Sub),
            F_AND => Some(Self::And),
            F_XOR => Some(Self::Xor),
            _ => None,
        }
    }

    /// Returns the function code of this operation.
    pub const fn funct(self) -> u8 {
        match self {
            Self::Add => F_ADD,
            Self::Sub => F_SUB,
            Self::And => F_AND,
            Self::Xor => F_XOR,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "addq",
            Self::Sub => "subq",
            Self::And => "andq",
            Self::Xor => "xorq",
        }
    }
}

/// Branch and conditional-move conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cond {
    /// Always true.
    Always,
    /// `(SF ^ OF) | ZF`
    Le,
    /// `SF ^ OF`
    L,
    /// `ZF`
    E,
    /// `!ZF`
    Ne,
    /// `!(SF ^ OF)`
    Ge,
    /// `!(SF ^ OF) & !ZF`
    G,
}

impl Cond {
    /// Every condition, in function-code order.
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Le,
        Self::L,
        Self::E,
        Self::Ne,
        Self::Ge,
        Self::G,
    ];

    /// Maps a `jXX`/`cmovXX` function code to a condition.
    ///
    /// # Returns
    ///
    /// `None` for function codes 7 through 15.
    pub const fn from_funct(ifun: u8) -> Option<Self> {
        match ifun {
            F_ALWAYS => Some(Self::Always),
            F_LE => Some(Self::Le),
            F_L => Some(Self::L),
            F_E => Some(Self::E),
            F_NE => Some(Self::Ne),
            F_GE => Some(Self::Ge),
            F_G => Some(Self::G),
            _ => None,
        }
    }

    /// Returns the function code of this condition.
    pub const fn funct(self) -> u8 {
        match self {
            Self::Always => F_ALWAYS,
            Self::Le => F_LE,
            Self::L => F_L,
            Self::E => F_E,
            Self::Ne => F_NE,
            Self::Ge => F_GE,
            Self::G => F_G,
        }
    }

    /// Mnemonic suffix (`""` for the unconditional form).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Always => "",
            Self::Le => "le",
            Self::L => "l",
            Self::E => "e",
            Self::Ne => "ne",
            Self::Ge => "ge",
            Self::G => "g",
        }
    }
}

/// A fully decoded Y86-64 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Stop the processor.
    Halt,
    /// Do nothing.
    Nop,
    /// `cmovXX rA, rB` (`rrmovq` when the condition is `Always`).
    CondMove {
        /// Move condition.
        cond: Cond,
        /// Source register (`rA`).
        src: Reg,
        /// Destination register (`rB`).
        dst: Reg,
    },
    /// `irmovq V, rB`
    LoadImm {
        /// Destination register (`rB`).
        dst: Reg,
        /// Constant loaded verbatim.
        value: i64,
    },
    /// `rmmovq rA, D(rB)`
    Store {
        /// Register whose value is stored (`rA`).
        src: Reg,
        /// Base register (`rB`), absent for absolute addressing.
        base: Option<Reg>,
        /// Displacement.
        disp: i64,
    },
    /// `mrmovq D(rB), rA`
    Load {
        /// Register receiving the loaded word (`rA`).
        dst: Reg,
        /// Base register (`rB`), absent for absolute addressing.
        base: Option<Reg>,
        /// Displacement.
        disp: i64,
    },
    /// `OPq rA, rB`: `rB <- rB op rA`.
    Alu {
        /// Operation.
        op: AluOp,
        /// Second operand (`rA`).
        src: Reg,
        /// First operand and destination (`rB`).
        dst: Reg,
    },
    /// `jXX Dest`
    Jump {
        /// Jump condition.
        cond: Cond,
        /// Target address.
        target: u64,
    },
    /// `call Dest`
    Call {
        /// Target address.
        target: u64,
    },
    /// `ret`
    Ret,
    /// `pushq rA`
    Push {
        /// Register pushed.
        src: Reg,
    },
    /// `popq rA`
    Pop {
        /// Register receiving the popped word.
        dst: Reg,
    },
}

impl Instruction {
    /// Returns the instruction-class code.
    pub const fn icode(&self) -> u8 {
        match self {
            Self::Halt => I_HALT,
            Self::Nop => I_NOP,
            Self::CondMove { .. } => I_RRMOVQ,
            Self::LoadImm { .. } => I_IRMOVQ,
            Self::Store { .. } => I_RMMOVQ,
            Self::Load { .. } => I_MRMOVQ,
            Self::Alu { .. } => I_OPQ,
            Self::Jump { .. } => I_JXX,
            Self::Call { .. } => I_CALL,
            Self::Ret => I_RET,
            Self::Push { .. } => I_PUSHQ,
            Self::Pop { .. } => I_POPQ,
        }
    }
}

/// Returns whether an instruction class carries a register-specifier byte.
pub const fn has_reg_byte(icode: u8) -> bool {
    matches!(
        icode,
        I_RRMOVQ | I_IRMOVQ | I_RMMOVQ | I_MRMOVQ | I_OPQ | I_PUSHQ | I_POPQ
    )
}

/// Returns whether an instruction class carries an 8-byte constant.
pub const fn has_const_word(icode: u8) -> bool {
    matches!(icode, I_IRMOVQ | I_RMMOVQ | I_MRMOVQ | I_JXX | I_CALL)
}

/// Returns the encoded length of an instruction class.
///
/// # Returns
///
/// `None` for classes outside the instruction set.
pub const fn encoded_len(icode: u8) -> Option<u64> {
    if icode > I_POPQ {
        return None;
    }
    let mut len = 1;
    if has_reg_byte(icode) {
        len += 1;
    }
    if has_const_word(icode) {
        len += 8;
    }
    Some(len)
}
