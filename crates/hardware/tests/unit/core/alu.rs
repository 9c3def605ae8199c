//! # ALU Tests
//!
//! Boundary vectors for the four `OPq` operations. Overflow is checked
//! against the exact mathematical result.

use rstest::rstest;
use y86_core::core::units::Alu;
use y86_core::isa::AluOp;

const MAX: u64 = i64::MAX as u64;
const MIN: u64 = i64::MIN as u64;
const NEG1: u64 = -1i64 as u64;

#[rstest]
#[case::zero(AluOp::Add, 0, 0, 0, (true, false, false))]
#[case::simple(AluOp::Add, 2, 3, 5, (false, false, false))]
#[case::positive_overflow(AluOp::Add, MAX, 1, MIN, (false, true, true))]
#[case::negative_overflow(AluOp::Add, MIN, NEG1, MAX, (false, false, true))]
#[case::wrap_to_zero(AluOp::Add, NEG1, 1, 0, (true, false, false))]
#[case::sub_negative(AluOp::Sub, 3, 5, -2i64 as u64, (false, true, false))]
#[case::sub_equal(AluOp::Sub, 9, 9, 0, (true, false, false))]
#[case::sub_min_minus_one(AluOp::Sub, MIN, 1, MAX, (false, false, true))]
#[case::sub_zero_minus_min(AluOp::Sub, 0, MIN, MIN, (false, true, true))]
#[case::and(AluOp::And, 0b1100, 0b1010, 0b1000, (false, false, false))]
#[case::and_zero(AluOp::And, 0xF0, 0x0F, 0, (true, false, false))]
#[case::xor_self(AluOp::Xor, MIN, MIN, 0, (true, false, false))]
#[case::xor_sign(AluOp::Xor, NEG1, 1, -2i64 as u64, (false, true, false))]
fn op_vectors(
    #[case] op: AluOp,
    #[case] b: u64,
    #[case] a: u64,
    #[case] result: u64,
    #[case] flags: (bool, bool, bool),
) {
    let (r, cc) = Alu::execute(op, b, a);
    assert_eq!(r, result);
    assert_eq!((cc.zf, cc.sf, cc.of), flags);
}

#[test]
fn logic_ops_never_overflow() {
    for op in [AluOp::And, AluOp::Xor] {
        for (b, a) in [(MAX, MAX), (MIN, NEG1), (NEG1, NEG1)] {
            assert!(!Alu::execute(op, b, a).1.of);
        }
    }
}

#[test]
fn subtract_is_destination_minus_source() {
    // subq %rA, %rB computes rB - rA
    let (r, _) = Alu::execute(AluOp::Sub, 10, 4);
    assert_eq!(r, 6);
}
