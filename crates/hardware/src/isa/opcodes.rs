//! Y86-64 instruction-class codes (high nibble of the first byte).

/// Stop the processor.
pub const I_HALT: u8 = 0x0;
/// No operation.
pub const I_NOP: u8 = 0x1;
/// Register-to-register move, conditional on `ifun` (`rrmovq`, `cmovXX`).
pub const I_RRMOVQ: u8 = 0x2;
/// Immediate-to-register load.
pub const I_IRMOVQ: u8 = 0x3;
/// Register-to-memory store.
pub const I_RMMOVQ: u8 = 0x4;
/// Memory-to-register load.
pub const I_MRMOVQ: u8 = 0x5;
/// Integer ALU operation (`addq`, `subq`, `andq`, `xorq`).
pub const I_OPQ: u8 = 0x6;
/// Jump, conditional on `ifun`.
pub const I_JXX: u8 = 0x7;
/// Procedure call.
pub const I_CALL: u8 = 0x8;
/// Procedure return.
pub const I_RET: u8 = 0x9;
/// Push a register onto the stack.
pub const I_PUSHQ: u8 = 0xA;
/// Pop the stack into a register.
pub const I_POPQ: u8 = 0xB;
