//! Arithmetic Logic Unit (ALU).
//!
//! Implements the four `OPq` operations and the condition codes they set.
//! Results wrap modulo 2^64. Overflow is decided on the exact mathematical
//! result, computed in 128 bits, rather than inferred from wraparound.

use crate::core::arch::flags::ConditionCodes;
use crate::isa::AluOp;

/// Sign bit of a 64-bit word.
const SIGN_BIT: u64 = 1 << 63;

/// Integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation.
    /// * `b` - First operand, `valB` (the destination register's value).
    /// * `a` - Second operand, `valA` (the source register's value).
    ///
    /// # Returns
    ///
    /// The wrapped 64-bit result and the condition codes it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use y86_core::core::units::alu::Alu;
    /// use y86_core::isa::AluOp;
    ///
    /// let (r, cc) = Alu::execute(AluOp::Sub, 3, 5);
    /// assert_eq!(r as i64, -2);
    /// assert!(cc.sf && !cc.zf && !cc.of);
    ///
    /// let (r, cc) = Alu::execute(AluOp::Add, i64::MAX as u64, 1);
    /// assert_eq!(r, 1 << 63);
    /// assert!(cc.of && cc.sf);
    /// ```
    pub fn execute(op: AluOp, b: u64, a: u64) -> (u64, ConditionCodes) {
        let (result, of) = match op {
            AluOp::Add => {
                let exact = i128::from(b as i64) + i128::from(a as i64);
                (b.wrapping_add(a), !fits_i64(exact))
            }
            AluOp::Sub => {
                let exact = i128::from(b as i64) - i128::from(a as i64);
                (b.wrapping_sub(a), !fits_i64(exact))
            }
            AluOp::And => (b & a, false),
            AluOp::Xor => (b ^ a, false),
        };
        let cc = ConditionCodes::new(result == 0, result & SIGN_BIT != 0, of);
        (result, cc)
    }
}

fn fits_i64(v: i128) -> bool {
    i64::try_from(v).is_ok()
}
