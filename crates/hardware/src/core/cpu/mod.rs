//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire Y86-64 architectural state. It coordinates the following:
//! 1. **State Management:** Program counter, registers, condition codes, and status.
//! 2. **Memory:** Exclusive ownership of the memory the program runs in.
//! 3. **Execution:** Fetch, decode, and execute of one instruction per step.
//! 4. **Statistics:** Retired-instruction accounting.

/// Instruction fetch, decode, and execution.
pub mod execution;

/// Stack access helpers (push/pop) used by call, ret, pushq, and popq.
pub mod memory;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::{ConditionCodes, Status};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// Each `Cpu` owns its memory outright; simulating several programs means
/// building several CPUs.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program Counter.
    pub pc: u64,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Condition codes.
    pub cc: ConditionCodes,
    /// Processor status.
    pub status: Status,
    /// Main memory.
    pub mem: Memory,
    /// Log every retired instruction at `info` level.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in the reset state over the given memory.
    ///
    /// Reset state: `PC = 0`, all registers zero, `ZF = 1, SF = 0, OF = 0`,
    /// status `AOK`.
    ///
    /// # Arguments
    ///
    /// * `mem` - Initialized memory image.
    /// * `config` - Simulator configuration.
    pub fn new(mem: Memory, config: &Config) -> Self {
        Self {
            pc: 0,
            regs: RegisterFile::new(),
            cc: ConditionCodes::default(),
            status: Status::Aok,
            mem,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Dumps the current CPU state (PC, status, flags, and registers) to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "PC = {:#018x}  STAT = {}  ZF={} SF={} OF={}",
            self.pc,
            self.status,
            u8::from(self.cc.zf),
            u8::from(self.cc.sf),
            u8::from(self.cc.of)
        );
        self.regs.dump();
    }
}
