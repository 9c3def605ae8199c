//! Execution trace.
//!
//! A [`Snapshot`] is the architectural state after one instruction has been
//! fully applied (or after a fault has been recorded). The ordered list of
//! snapshots is the [`Trace`], the simulator's only output.
//!
//! Both types derive serde traits and map onto the JSON layout the grading
//! tools consume:
//!
//! ```json
//! { "PC": 10, "STAT": 1,
//!   "CC": { "ZF": 1, "SF": 0, "OF": 0 },
//!   "REG": { "rax": 5, "rcx": 0, "...": 0 },
//!   "MEM": { "0": 4294967344 } }
//! ```

use std::collections::BTreeMap;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::common::Reg;
use crate::common::constants::REG_COUNT;
use crate::core::Cpu;
use crate::core::arch::{ConditionCodes, Status};

/// Architectural state after one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Program counter.
    #[serde(rename = "PC")]
    pub pc: u64,
    /// Processor status.
    #[serde(rename = "STAT")]
    pub status: Status,
    /// Condition codes.
    #[serde(rename = "CC")]
    pub cc: ConditionCodes,
    /// Registers as signed values, in architectural order.
    #[serde(rename = "REG", with = "reg_map")]
    pub regs: [i64; REG_COUNT],
    /// Non-zero aligned 8-byte words as signed values, keyed by address.
    #[serde(rename = "MEM", default)]
    pub mem: BTreeMap<u64, i64>,
}

impl Snapshot {
    /// Captures the current state of a CPU.
    pub fn capture(cpu: &Cpu) -> Self {
        Self {
            pc: cpu.pc,
            status: cpu.status,
            cc: cpu.cc,
            regs: cpu.regs.to_signed_array(),
            mem: cpu.mem.nonzero_words(),
        }
    }

    /// Signed value of one register.
    pub const fn reg(&self, reg: Reg) -> i64 {
        self.regs[reg.index()]
    }

    /// Signed value of the aligned word at `addr` (zero if not recorded).
    pub fn mem_word(&self, addr: u64) -> i64 {
        self.mem.get(&addr).copied().unwrap_or(0)
    }
}

/// `REG` is an object keyed by register name rather than an array.
mod reg_map {
    use std::collections::BTreeMap;

    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::common::constants::REG_COUNT;
    use crate::isa::abi;

    pub(super) fn serialize<S: Serializer>(regs: &[i64; REG_COUNT], s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(REG_COUNT))?;
        for (name, value) in abi::REG_NAMES.iter().zip(regs) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }

    /// Registers absent from the object read as zero.
    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[i64; REG_COUNT], D::Error> {
        let named = BTreeMap::<String, i64>::deserialize(d)?;
        let mut regs = [0; REG_COUNT];
        for (name, value) in named {
            let idx = abi::index_of(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown register '{name}'")))?;
            regs[idx] = value;
        }
        Ok(regs)
    }
}

/// Ordered, append-only list of snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Snapshot>,
}

impl Trace {
    /// Creates an empty trace.
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a snapshot. Snapshots already in the trace are never modified.
    pub(crate) fn push(&mut self, snap: Snapshot) {
        self.steps.push(snap);
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing was executed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last snapshot, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.steps.last()
    }

    /// Status recorded in the last snapshot.
    pub fn final_status(&self) -> Option<Status> {
        self.last().map(|s| s.status)
    }

    /// Snapshot at position `idx`.
    pub fn get(&self, idx: usize) -> Option<&Snapshot> {
        self.steps.get(idx)
    }

    /// Iterates over snapshots in execution order.
    pub fn iter(&self) -> slice::Iter<'_, Snapshot> {
        self.steps.iter()
    }

    /// Borrows the snapshots as a slice.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.steps
    }
}

impl From<Vec<Snapshot>> for Trace {
    fn from(steps: Vec<Snapshot>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
