use rstest::rstest;
use y86_core::ConditionCodes;
use y86_core::isa::Cond;

#[test]
fn reset_state_has_zero_flag() {
    let cc = ConditionCodes::default();
    assert!(cc.zf && !cc.sf && !cc.of);
}

/// Rows are (ZF, SF, OF); columns follow `Cond::ALL`.
#[rstest]
#[case((false, false, false), [true, false, false, false, true, true, true])]
#[case((true, false, false), [true, true, false, true, false, true, false])]
#[case((false, true, false), [true, true, true, false, true, false, false])]
#[case((false, false, true), [true, true, true, false, true, false, false])]
#[case((false, true, true), [true, false, false, false, true, true, true])]
#[case((true, true, true), [true, true, false, true, false, true, false])]
fn condition_table(#[case] flags: (bool, bool, bool), #[case] expected: [bool; 7]) {
    let cc = ConditionCodes::new(flags.0, flags.1, flags.2);
    let got: Vec<bool> = Cond::ALL.iter().map(|&c| cc.holds(c)).collect();
    assert_eq!(got, expected);
}
