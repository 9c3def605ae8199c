//! Core processor implementation.
//!
//! This module contains the architectural state of the Y86-64 processor,
//! the execution units it computes with, and the CPU that applies one
//! decoded instruction at a time.

/// Architectural state components (condition codes, status).
pub mod arch;

/// CPU core implementation and instruction execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
