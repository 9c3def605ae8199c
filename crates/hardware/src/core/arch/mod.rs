//! Y86-64 architectural state components.
//!
//! This module contains the processor state that is not a register or memory:
//! 1. **Flags:** The zero, sign, and overflow condition codes and branch-condition evaluation.
//! 2. **Status:** The processor status code and its terminal states.

/// Condition codes and condition evaluation.
pub mod flags;

/// Processor status codes.
pub mod status;

pub use flags::ConditionCodes;
pub use status::Status;
