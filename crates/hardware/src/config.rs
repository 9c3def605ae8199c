//! Configuration system for the Y86-64 simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (address-space size, step ceiling).
//! 2. **Structures:** `general` (run-loop behaviour) and `memory` (address space) sections.
//!
//! Configuration is deserialized from JSON by the CLI, or built with
//! `Config::default()`. Every field is optional in the JSON form.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MAX_STEPS, MEM_MAX_SIZE};

/// Root simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Run-loop settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Maximum number of instructions to execute before stopping.
    ///
    /// A runaway guard for programs that never halt; reaching it is not a
    /// fault and leaves the status at `AOK`.
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,

    /// Log every retired instruction at `info` level.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl GeneralConfig {
    /// Returns the default step ceiling.
    fn default_max_steps() -> u64 {
        DEFAULT_MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            trace_instructions: false,
        }
    }
}

/// Address-space configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Address bound: valid addresses are `0..size`.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: u64,
}

impl MemoryConfig {
    /// Returns the default address-space size.
    fn default_size() -> u64 {
        MEM_MAX_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: MEM_MAX_SIZE,
        }
    }
}
