//! Register identifiers and the register file.
//!
//! This module provides:
//! 1. **Identifiers:** `Reg`, a register number proven to name one of the 15 registers.
//! 2. **Storage:** `RegisterFile`, fifteen 64-bit words stored modulo 2^64.
//! 3. **Observability:** Signed views and a debugging dump.

use std::fmt;

use super::constants::{REG_COUNT, REG_NONE};
use crate::isa::abi;

/// A validated architectural register identifier (`0..=14`).
///
/// The 16th encoding, `0xF`, means "no register" and has no `Reg` value;
/// decoding it where an operand is required is an invalid instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(u8);

impl Reg {
    /// `%rax`
    pub const RAX: Self = Self(0);
    /// `%rcx`
    pub const RCX: Self = Self(1);
    /// `%rdx`
    pub const RDX: Self = Self(2);
    /// `%rbx`
    pub const RBX: Self = Self(3);
    /// `%rsp`, implicitly used by call, ret, push and pop.
    pub const RSP: Self = Self(abi::REG_SP as u8);
    /// `%rbp`
    pub const RBP: Self = Self(5);
    /// `%rsi`
    pub const RSI: Self = Self(6);
    /// `%rdi`
    pub const RDI: Self = Self(7);
    /// `%r8`
    pub const R8: Self = Self(8);
    /// `%r9`
    pub const R9: Self = Self(9);
    /// `%r10`
    pub const R10: Self = Self(10);
    /// `%r11`
    pub const R11: Self = Self(11);
    /// `%r12`
    pub const R12: Self = Self(12);
    /// `%r13`
    pub const R13: Self = Self(13);
    /// `%r14`
    pub const R14: Self = Self(14);

    /// Maps a register-specifier nibble to a register.
    ///
    /// # Returns
    ///
    /// `None` for `0xF` ("no register") and for anything wider than a nibble.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        if nibble < REG_NONE {
            Some(Self(nibble))
        } else {
            None
        }
    }

    /// Returns the register's index into the register file.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 4-bit encoding of the register.
    #[inline]
    pub const fn nibble(self) -> u8 {
        self.0
    }

    /// Returns the register's architectural name without the `%` sigil.
    pub const fn name(self) -> &'static str {
        abi::REG_NAMES[self.0 as usize]
    }

    /// Iterates over every register in architectural order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..REG_COUNT as u8).map(Self)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.name())
    }
}

/// The fifteen general-purpose registers.
///
/// Values are stored as raw 64-bit words; the signed interpretation is
/// derived on demand with [`RegisterFile::read_signed`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; REG_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register as an unsigned word.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u64 {
        self.regs[reg.index()]
    }

    /// Reads a register as a two's-complement signed word.
    #[inline]
    pub const fn read_signed(&self, reg: Reg) -> i64 {
        self.regs[reg.index()] as i64
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: u64) {
        self.regs[reg.index()] = val;
    }

    /// Returns every register as a signed value, in architectural order.
    pub fn to_signed_array(&self) -> [i64; REG_COUNT] {
        self.regs.map(|v| v as i64)
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in rows of three with hexadecimal formatting.
    pub fn dump(&self) {
        for row in Reg::all().collect::<Vec<_>>().chunks(3) {
            let line: Vec<String> = row
                .iter()
                .map(|&r| format!("{:>5}={:#018x}", r.to_string(), self.read(r)))
                .collect();
            eprintln!("{}", line.join(" "));
        }
    }
}
