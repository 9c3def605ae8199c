//! Simulated system components.
//!
//! The Y86-64 machine has a single flat memory and no devices, so this
//! module only holds the memory store the processor fetches from and
//! loads/stores into.

/// Byte-addressable system memory.
pub mod memory;

pub use memory::Memory;
