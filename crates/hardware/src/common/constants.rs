//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** The address-space bound and machine word size.
//! 2. **Register Constants:** Register-file size and the "no register" encoding.
//! 3. **Simulation Constants:** The default runaway guard for the run loop.

/// Size of the simulated address space in bytes (128 KiB).
///
/// Every valid address `a` satisfies `0 <= a < MEM_MAX_SIZE`.
pub const MEM_MAX_SIZE: u64 = 0x20000;

/// Size of a machine word in bytes.
pub const WORD_SIZE: u64 = 8;

/// Number of architectural general-purpose registers (`%rax` through `%r14`).
pub const REG_COUNT: usize = 15;

/// Register-specifier nibble meaning "no register".
pub const REG_NONE: u8 = 0xF;

/// Default number of instructions executed before the run loop gives up.
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Mask selecting the low nibble of a byte.
pub const NIBBLE_MASK: u8 = 0xF;

/// Shift to reach the high nibble of a byte.
pub const NIBBLE_SHIFT: u8 = 4;
