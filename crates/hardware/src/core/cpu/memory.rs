//! Stack Access Helpers.
//!
//! `%rsp` is moved only after the memory access succeeds, so a push or pop
//! that faults leaves both memory and the stack pointer untouched.

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::{Fault, Reg};

impl Cpu {
    /// Pushes a word: `%rsp -= 8; M[%rsp] = val`.
    ///
    /// # Returns
    ///
    /// `InvalidAddress` if the new top of stack lies outside memory.
    pub fn push_word(&mut self, val: u64) -> Result<(), Fault> {
        let sp = self.regs.read(Reg::RSP).wrapping_sub(WORD_SIZE);
        self.mem.write_word(sp, val)?;
        self.regs.write(Reg::RSP, sp);
        Ok(())
    }

    /// Pops a word: `val = M[%rsp]; %rsp += 8`.
    ///
    /// The stack pointer is updated before returning, so a caller that then
    /// writes the value into `%rsp` overrides the increment.
    pub fn pop_word(&mut self) -> Result<u64, Fault> {
        let sp = self.regs.read(Reg::RSP);
        let val = self.mem.read_word(sp)?;
        self.regs.write(Reg::RSP, sp.wrapping_add(WORD_SIZE));
        Ok(val)
    }

    /// Computes `D(rB)`; a missing base register counts as zero.
    pub(crate) fn effective_address(&self, base: Option<Reg>, disp: i64) -> u64 {
        base.map_or(0, |b| self.regs.read(b))
            .wrapping_add(disp as u64)
    }
}
