//! Execution units.
//!
//! Y86-64 has a single functional unit, the integer ALU used by `OPq`.

/// Integer ALU and condition-code generation.
pub mod alu;

pub use alu::Alu;
