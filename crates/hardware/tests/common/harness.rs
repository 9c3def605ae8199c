use y86_core::common::Reg;
use y86_core::config::Config;
use y86_core::core::Cpu;
use y86_core::{Image, Simulator, Status, Trace};

use super::builder::ProgramBuilder;

/// Routes simulator logs to the test output capture.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    pub fn new(image: &Image) -> Self {
        Self::with_config(image, &Config::default())
    }

    pub fn with_config(image: &Image, config: &Config) -> Self {
        init_logging();
        Self {
            sim: Simulator::new(image, config),
        }
    }

    pub fn program(builder: ProgramBuilder) -> Self {
        Self::new(&builder.build())
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    pub fn set_reg(&mut self, reg: Reg, val: i64) {
        self.sim.cpu.regs.write(reg, val as u64);
    }

    /// Signed register value.
    pub fn reg(&self, reg: Reg) -> i64 {
        self.sim.cpu.regs.read_signed(reg)
    }

    /// Signed word at an address, panicking on an out-of-range read.
    pub fn mem_word(&self, addr: u64) -> i64 {
        self.sim.cpu.mem.read_word_signed(addr).unwrap()
    }

    pub fn step(&mut self) -> Status {
        self.sim.step()
    }

    /// Steps `n` times, stopping early on a terminal status.
    pub fn step_n(&mut self, n: usize) -> Status {
        for _ in 0..n {
            if self.step().is_terminal() {
                break;
            }
        }
        self.sim.status()
    }

    pub fn run(&mut self) -> Trace {
        self.sim.run()
    }
}
