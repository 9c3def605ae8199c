//! Trace comparison against a stored reference.
//!
//! Registers and memory words missing on either side read as zero, so a
//! reference that omits zero-valued entries still matches.

use std::collections::BTreeSet;

use y86_core::Snapshot;
use y86_core::common::Reg;

/// Maximum number of differences reported for one step.
pub const MAX_REPORTED: usize = 5;

/// Outcome of comparing two traces.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every step matched.
    Match,
    /// The traces have different lengths.
    Length {
        /// Steps produced by the simulator.
        actual: usize,
        /// Steps in the reference.
        expected: usize,
    },
    /// The first step whose state differs, with up to [`MAX_REPORTED`] differences.
    Step {
        /// Zero-based step index.
        index: usize,
        /// Human-readable difference lines.
        diffs: Vec<String>,
    },
}

/// Compares `actual` against `expected` step by step.
pub fn compare(actual: &[Snapshot], expected: &[Snapshot]) -> Verdict {
    if actual.len() != expected.len() {
        return Verdict::Length {
            actual: actual.len(),
            expected: expected.len(),
        };
    }
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        let mut diffs = diff_snapshot(a, e);
        if !diffs.is_empty() {
            diffs.truncate(MAX_REPORTED);
            return Verdict::Step { index, diffs };
        }
    }
    Verdict::Match
}

/// Lists every field that differs between two snapshots.
pub fn diff_snapshot(actual: &Snapshot, expected: &Snapshot) -> Vec<String> {
    let mut diffs = Vec::new();
    if actual.pc != expected.pc {
        diffs.push(format!("PC: got {}, expected {}", actual.pc, expected.pc));
    }
    if actual.status != expected.status {
        diffs.push(format!(
            "STAT: got {}, expected {}",
            actual.status.code(),
            expected.status.code()
        ));
    }
    if actual.cc != expected.cc {
        diffs.push(format!("CC: got {}, expected {}", fmt_cc(actual), fmt_cc(expected)));
    }
    for reg in Reg::all() {
        let (a, e) = (actual.reg(reg), expected.reg(reg));
        if a != e {
            diffs.push(format!("REG {}: got {a}, expected {e}", reg.name()));
        }
    }
    let addrs: BTreeSet<u64> = actual.mem.keys().chain(expected.mem.keys()).copied().collect();
    for addr in addrs {
        let (a, e) = (actual.mem_word(addr), expected.mem_word(addr));
        if a != e {
            diffs.push(format!("MEM {addr}: got {a}, expected {e}"));
        }
    }
    diffs
}

fn fmt_cc(s: &Snapshot) -> String {
    format!(
        "ZF={} SF={} OF={}",
        u8::from(s.cc.zf),
        u8::from(s.cc.sf),
        u8::from(s.cc.of)
    )
}
