//! Common utilities and types used throughout the Y86-64 simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Address-space bound, word size, register-file shape, and run limits.
//! 2. **Error Handling:** Architectural faults and loader errors.
//! 3. **Register Management:** Validated register identifiers and the register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEM_MAX_SIZE, WORD_SIZE};
pub use error::{Fault, LoadError};
pub use reg::{Reg, RegisterFile};
