//! Simulator: owns the CPU and drives it to completion.
//!
//! The run loop is a small state machine: the CPU stays `AOK` and keeps
//! stepping until it halts, faults, or the configured step ceiling is hit.
//! Every executed step appends one snapshot, including the step that
//! halts or faults.

use crate::common::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::Status;
use crate::sim::loader::Image;
use crate::sim::trace::{Snapshot, Trace};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus run-loop bookkeeping.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, flags, status, memory, stats).
    pub cpu: Cpu,
    max_steps: u64,
    steps: u64,
}

impl Simulator {
    /// Creates a simulator over a memory image.
    ///
    /// # Arguments
    ///
    /// * `image` - Initial memory contents.
    /// * `config` - Address-space size, step ceiling, and tracing options.
    pub fn new(image: &Image, config: &Config) -> Self {
        let mem = Memory::from_image(image, config.memory.size);
        Self {
            cpu: Cpu::new(mem, config),
            max_steps: config.general.max_steps,
            steps: 0,
        }
    }

    /// Creates a simulator with the default configuration.
    pub fn from_image(image: &Image) -> Self {
        Self::new(image, &Config::default())
    }

    /// Current processor status.
    pub const fn status(&self) -> Status {
        self.cpu.status
    }

    /// Number of steps executed so far (including a faulting one).
    pub const fn steps_executed(&self) -> u64 {
        self.steps
    }

    /// Retired-instruction statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Captures the current architectural state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu)
    }

    /// Executes one instruction.
    ///
    /// Does nothing once the status is terminal. A fault sets the status
    /// and leaves `PC` on the faulting instruction.
    ///
    /// # Returns
    ///
    /// The status after the step.
    pub fn step(&mut self) -> Status {
        if self.cpu.status.is_terminal() {
            return self.cpu.status;
        }
        self.steps += 1;

        let pc = self.cpu.pc;
        let result = if pc >= self.cpu.mem.size() {
            Err(Fault::InvalidAddress(pc))
        } else {
            self.cpu.step().map(|_| ())
        };

        match result {
            Ok(()) if self.cpu.status == Status::Hlt => {
                tracing::info!(pc, steps = self.steps, "halted");
            }
            Ok(()) => {}
            Err(fault) => {
                tracing::warn!(pc, %fault, "fault");
                self.cpu.status = fault.status();
            }
        }
        self.cpu.status
    }

    /// Runs until a terminal status or the step ceiling.
    ///
    /// # Returns
    ///
    /// One snapshot per executed step.
    pub fn run(&mut self) -> Trace {
        let mut trace = Trace::new();
        while !self.cpu.status.is_terminal() {
            if self.steps >= self.max_steps {
                tracing::warn!(
                    max_steps = self.max_steps,
                    pc = self.cpu.pc,
                    "step limit reached before the program stopped"
                );
                break;
            }
            let _ = self.step();
            trace.push(self.snapshot());
        }
        trace
    }
}

/// Builds a simulator over `image`, runs it, and returns the trace.
pub fn simulate(image: &Image, config: &Config) -> Trace {
    Simulator::new(image, config).run()
}
