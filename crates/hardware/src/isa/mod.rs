//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the Y86-64 encoding tables, the decoded instruction type, and the
//! decoder that turns bytes in memory into instructions.
//!
//! # Encoding
//!
//! Every instruction starts with one byte split into a 4-bit class (`icode`)
//! and a 4-bit function code (`ifun`). Depending on the class it continues
//! with a register-specifier byte (`rA:rB`) and/or an 8-byte little-endian
//! constant.

/// Architectural register names and implicit register assignments.
pub mod abi;

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Function codes for the ALU and the condition selector.
pub mod funct;

/// Decoded instruction representation.
pub mod instruction;

/// Instruction-class codes.
pub mod opcodes;

pub use decode::{Decoded, decode};
pub use instruction::{AluOp, Cond, Instruction};
