//! Function codes (low nibble of the first byte).
//!
//! `OPq` selects an ALU operation with it; `jXX` and `cmovXX` select a
//! branch condition.

/// `addq`
pub const F_ADD: u8 = 0x0;
/// `subq`
pub const F_SUB: u8 = 0x1;
/// `andq`
pub const F_AND: u8 = 0x2;
/// `xorq`
pub const F_XOR: u8 = 0x3;

/// Unconditional (`jmp`, `rrmovq`).
pub const F_ALWAYS: u8 = 0x0;
/// Less or equal.
pub const F_LE: u8 = 0x1;
/// Less.
pub const F_L: u8 = 0x2;
/// Equal.
pub const F_E: u8 = 0x3;
/// Not equal.
pub const F_NE: u8 = 0x4;
/// Greater or equal.
pub const F_GE: u8 = 0x5;
/// Greater.
pub const F_G: u8 = 0x6;
