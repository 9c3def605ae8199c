//! # Run Loop Properties
//!
//! Invariants checked over generated programs: termination, trace shape,
//! flag semantics, and the stack discipline.

use proptest::prelude::*;
use y86_core::common::{MEM_MAX_SIZE, Reg};
use y86_core::config::Config;
use y86_core::{Image, Status, simulate};

use crate::common::builder::ProgramBuilder;

fn config(max_steps: u64) -> Config {
    let mut c = Config::default();
    c.general.max_steps = max_steps;
    c
}

proptest! {
    #[test]
    fn nops_then_halt(n in 0usize..64) {
        let mut b = ProgramBuilder::new();
        for _ in 0..n {
            b = b.nop();
        }
        let trace = simulate(&b.halt().build(), &Config::default());
        prop_assert_eq!(trace.len(), n + 1);
        let last = trace.last().unwrap();
        prop_assert_eq!(last.status, Status::Hlt);
        prop_assert_eq!(last.pc, n as u64);
    }

    #[test]
    fn arbitrary_bytes_terminate(bytes in prop::collection::vec(any::<u8>(), 0..96), limit in 1u64..200) {
        let image: Image = (0u64..).zip(bytes).collect();
        let trace = simulate(&image, &config(limit));

        prop_assert!(trace.len() as u64 <= limit);
        // Only the last entry may carry a terminal status.
        for snap in trace.iter().take(trace.len().saturating_sub(1)) {
            prop_assert_eq!(snap.status, Status::Aok);
        }
        if trace.final_status() == Some(Status::Aok) {
            prop_assert_eq!(trace.len() as u64, limit);
        }
        for snap in &trace {
            for (&addr, &val) in &snap.mem {
                prop_assert_eq!(addr % 8, 0);
                prop_assert!(addr < MEM_MAX_SIZE);
                prop_assert_ne!(val, 0);
            }
        }
    }

    #[test]
    fn add_flags_match_exact_sum(a: i64, b: i64) {
        let prog = ProgramBuilder::new()
            .irmovq(a, Reg::RAX)
            .irmovq(b, Reg::RBX)
            .addq(Reg::RBX, Reg::RAX)
            .halt();
        let trace = simulate(&prog.build(), &Config::default());
        let snap = trace.get(2).unwrap();

        let exact = i128::from(a) + i128::from(b);
        let wrapped = a.wrapping_add(b);
        prop_assert_eq!(snap.reg(Reg::RAX), wrapped);
        prop_assert_eq!(snap.cc.zf, wrapped == 0);
        prop_assert_eq!(snap.cc.sf, wrapped < 0);
        prop_assert_eq!(snap.cc.of, i64::try_from(exact).is_err());
    }

    #[test]
    fn sub_flags_match_exact_difference(a: i64, b: i64) {
        let prog = ProgramBuilder::new()
            .irmovq(a, Reg::RAX)
            .irmovq(b, Reg::RBX)
            .subq(Reg::RBX, Reg::RAX)
            .halt();
        let trace = simulate(&prog.build(), &Config::default());
        let snap = trace.get(2).unwrap();

        let exact = i128::from(a) - i128::from(b);
        let wrapped = a.wrapping_sub(b);
        prop_assert_eq!(snap.reg(Reg::RAX), wrapped);
        prop_assert_eq!(snap.cc.zf, wrapped == 0);
        prop_assert_eq!(snap.cc.sf, wrapped < 0);
        prop_assert_eq!(snap.cc.of, i64::try_from(exact).is_err());
    }

    #[test]
    fn push_pop_restores_stack(v: i64, sp in (1u64..0x1000).prop_map(|w| 0x1000 + w * 8)) {
        let prog = ProgramBuilder::new()
            .irmovq(sp as i64, Reg::RSP)
            .irmovq(v, Reg::RAX)
            .pushq(Reg::RAX)
            .popq(Reg::RCX)
            .halt();
        let trace = simulate(&prog.build(), &Config::default());
        let last = trace.last().unwrap();
        prop_assert_eq!(last.status, Status::Hlt);
        prop_assert_eq!(last.reg(Reg::RCX), v);
        prop_assert_eq!(last.reg(Reg::RSP), sp as i64);
        prop_assert_eq!(last.mem_word(sp - 8), v);
    }
}
