//! CPU core tests.

/// ALU results and flag computation.
pub mod alu;


/// Condition evaluation.
pub mod flags;
