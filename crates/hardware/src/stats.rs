//! Simulation statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Totals:** Retired instructions and host wall-clock time.
//! 2. **Instruction mix:** Counts by class (moves, loads, stores, ALU, control flow, stack).
//! 3. **Control flow:** Taken versus not-taken conditional jumps and moves.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::{Cond, Instruction};

/// Simulation statistics, updated once per retired instruction.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions retired (faulting instructions are not counted).
    pub instructions_retired: u64,

    /// `halt` instructions retired.
    pub inst_halt: u64,
    /// `nop` instructions retired.
    pub inst_nop: u64,
    /// `rrmovq` / `cmovXX` instructions retired.
    pub inst_move: u64,
    /// `cmovXX` whose condition held (includes `rrmovq`).
    pub moves_taken: u64,
    /// `irmovq` instructions retired.
    pub inst_load_imm: u64,
    /// `mrmovq` instructions retired.
    pub inst_load: u64,
    /// `rmmovq` instructions retired.
    pub inst_store: u64,
    /// `OPq` instructions retired.
    pub inst_alu: u64,
    /// `jXX` instructions retired.
    pub inst_jump: u64,
    /// Conditional jumps (not `jmp`) that were taken.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
    /// `call` instructions retired.
    pub inst_call: u64,
    /// `ret` instructions retired.
    pub inst_ret: u64,
    /// `pushq` instructions retired.
    pub inst_push: u64,
    /// `popq` instructions retired.
    pub inst_pop: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_halt: 0,
            inst_nop: 0,
            inst_move: 0,
            moves_taken: 0,
            inst_load_imm: 0,
            inst_load: 0,
            inst_store: 0,
            inst_alu: 0,
            inst_jump: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            inst_call: 0,
            inst_ret: 0,
            inst_push: 0,
            inst_pop: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that retired.
    /// * `taken` - Whether its condition held (meaningful for `jXX` and `cmovXX`).
    pub fn record(&mut self, inst: &Instruction, taken: bool) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Halt => self.inst_halt += 1,
            Instruction::Nop => self.inst_nop += 1,
            Instruction::CondMove { .. } => {
                self.inst_move += 1;
                if taken {
                    self.moves_taken += 1;
                }
            }
            Instruction::LoadImm { .. } => self.inst_load_imm += 1,
            Instruction::Load { .. } => self.inst_load += 1,
            Instruction::Store { .. } => self.inst_store += 1,
            Instruction::Alu { .. } => self.inst_alu += 1,
            Instruction::Jump { cond, .. } => {
                self.inst_jump += 1;
                if *cond != Cond::Always {
                    if taken {
                        self.branches_taken += 1;
                    } else {
                        self.branches_not_taken += 1;
                    }
                }
            }
            Instruction::Call { .. } => self.inst_call += 1,
            Instruction::Ret => self.inst_ret += 1,
            Instruction::Push { .. } => self.inst_push += 1,
            Instruction::Pop { .. } => self.inst_pop += 1,
        }
    }

    /// Renders the statistics report.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let conditional = self.branches_taken + self.branches_not_taken;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "Y86-64 SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, n) in [
            ("halt", self.inst_halt),
            ("nop", self.inst_nop),
            ("move", self.inst_move),
            ("load_imm", self.inst_load_imm),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("alu", self.inst_alu),
            ("jump", self.inst_jump),
            ("call", self.inst_call),
            ("ret", self.inst_ret),
            ("push", self.inst_push),
            ("pop", self.inst_pop),
        ] {
            let _ = writeln!(out, "  op.{name:<20} {n} ({:.2}%)", pct(n));
        }
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "CONTROL FLOW");
        let _ = writeln!(out, "  branch.conditional     {conditional}");
        let _ = writeln!(out, "  branch.taken           {}", self.branches_taken);
        let _ = writeln!(out, "  branch.not_taken       {}", self.branches_not_taken);
        let _ = writeln!(out, "  cmov.taken             {}", self.moves_taken);
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the statistics report to stderr.
    pub fn print(&self) {
        eprint!("{}", self.report());
    }
}
