//! Fault and loader error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Faults:** The two architectural exceptions a Y86-64 program can raise.
//! 2. **Status Mapping:** Converting a fault into the terminal status it produces.
//! 3. **Loader Errors:** The only failure a caller sees before execution starts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::arch::status::Status;

/// Architectural faults raised while fetching, decoding, or executing.
///
/// A fault never propagates out of the run loop as an error: the simulator
/// records it in the status code and stops. It is a `Result` error only
/// inside a single instruction so that `?` can unwind before any state is
/// committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// An access, fetch, or operand read/write touched memory outside
    /// `[0, MAX_ADDR)`. The associated value is the first offending address.
    #[error("invalid address {0:#x}")]
    InvalidAddress(u64),

    /// Unknown instruction class, unknown function code, or a required
    /// register operand encoded as "no register".
    #[error("invalid instruction byte {byte:#04x} at {pc:#x}")]
    InvalidInstruction {
        /// Address of the offending instruction.
        pc: u64,
        /// First byte of the offending instruction.
        byte: u8,
    },
}

impl Fault {
    /// Returns the terminal status this fault leaves the processor in.
    pub const fn status(self) -> Status {
        match self {
            Self::InvalidAddress(_) => Status::Adr,
            Self::InvalidInstruction { .. } => Status::Ins,
        }
    }
}

/// Errors raised while reading a memory image before simulation starts.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The object listing could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
