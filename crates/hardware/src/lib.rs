//! Y86-64 instruction-level simulator library.
//!
//! This crate implements a sequential Y86-64 simulator with the following:
//! 1. **Core:** Program counter, register file, condition codes, status, and the ALU.
//! 2. **Memory:** A sparse, bounded, byte-addressable address space with little-endian words.
//! 3. **ISA:** Decoding, disassembly, and execution of the full Y86-64 instruction set.
//! 4. **Simulation:** Object-listing loader, run loop, execution trace, and statistics.

/// Common types and constants (registers, faults, loader errors).
pub mod common;
/// Simulator configuration (run limits, tracing, address-space size).
pub mod config;
/// CPU core (architectural state, execution, ALU).
pub mod core;
/// Instruction set (encodings, decode, disassembly, register names).
pub mod isa;
/// Loader, run loop, and execution trace.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, status, memory, and stats.
pub use crate::core::Cpu;
/// Architectural status codes and condition codes.
pub use crate::core::arch::{ConditionCodes, Status};
/// Memory image produced by the loader.
pub use crate::sim::loader::Image;
/// Top-level simulator and its output.
pub use crate::sim::{Simulator, Snapshot, Trace, simulate};
/// Sparse, bounded memory.
pub use crate::soc::Memory;
