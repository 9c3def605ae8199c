//! Instruction Execution.
//!
//! This module implements the per-instruction cycle of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Turns the bytes at `PC` into an [`Instruction`].
//! 2. **Execute:** Applies the instruction's effect to registers, flags, and memory.
//! 3. **PC Update:** Moves to the fall-through address or the branch target.
//!
//! An instruction either commits all of its effects or none of them: every
//! check that can fail runs before the first architectural write.

use super::Cpu;
use crate::common::Fault;
use crate::core::arch::Status;
use crate::core::units::Alu;
use crate::isa::{Decoded, Instruction, decode};

impl Cpu {
    /// Fetches, decodes, and executes the instruction at `PC`.
    ///
    /// On success `PC` holds the next instruction's address (or is left on
    /// the `halt`, with status `HLT`). On a fault nothing is modified and
    /// the caller decides how to record it.
    ///
    /// # Returns
    ///
    /// The instruction that was executed.
    pub fn step(&mut self) -> Result<Instruction, Fault> {
        let decoded = decode(&self.mem, self.pc)?;
        tracing::trace!(pc = decoded.pc, inst = %decoded.inst, "decoded");
        let (next_pc, taken) = self.execute(&decoded)?;
        if self.trace {
            tracing::info!("{:#06x}: {}", decoded.pc, decoded.inst);
        }
        self.stats.record(&decoded.inst, taken);
        self.pc = next_pc;
        Ok(decoded.inst)
    }

    /// Applies a decoded instruction.
    ///
    /// # Returns
    ///
    /// The new program counter and, for `jXX`/`cmovXX`, whether the
    /// condition held.
    pub fn execute(&mut self, d: &Decoded) -> Result<(u64, bool), Fault> {
        let mut next_pc = d.next_pc;
        let mut taken = false;

        match d.inst {
            Instruction::Halt => {
                self.status = Status::Hlt;
                next_pc = d.pc;
            }
            Instruction::Nop => {}
            Instruction::CondMove { cond, src, dst } => {
                taken = self.cc.holds(cond);
                if taken {
                    self.regs.write(dst, self.regs.read(src));
                }
            }
            Instruction::LoadImm { dst, value } => {
                self.regs.write(dst, value as u64);
            }
            Instruction::Store { src, base, disp } => {
                let addr = self.effective_address(base, disp);
                self.mem.write_word(addr, self.regs.read(src))?;
            }
            Instruction::Load { dst, base, disp } => {
                let addr = self.effective_address(base, disp);
                let val = self.mem.read_word(addr)?;
                self.regs.write(dst, val);
            }
            Instruction::Alu { op, src, dst } => {
                let (result, cc) = Alu::execute(op, self.regs.read(dst), self.regs.read(src));
                self.regs.write(dst, result);
                self.cc = cc;
            }
            Instruction::Jump { cond, target } => {
                taken = self.cc.holds(cond);
                if taken {
                    next_pc = target;
                }
            }
            Instruction::Call { target } => {
                self.push_word(d.next_pc)?;
                next_pc = target;
            }
            Instruction::Ret => {
                next_pc = self.pop_word()?;
            }
            Instruction::Push { src } => {
                // pushq %rsp stores the value from before the decrement.
                let val = self.regs.read(src);
                self.push_word(val)?;
            }
            Instruction::Pop { dst } => {
                let val = self.pop_word()?;
                self.regs.write(dst, val);
            }
        }

        Ok((next_pc, taken))
    }
}
