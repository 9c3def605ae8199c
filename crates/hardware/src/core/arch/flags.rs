//! Condition Codes.
//!
//! The three flags are written only by `OPq` and read by `jXX` and
//! `cmovXX`. All other instructions leave them as they were.

use serde::{Deserialize, Serialize};

use crate::isa::Cond;

/// Zero, sign, and overflow flags.
///
/// Serializes as `{"ZF": 0|1, "SF": 0|1, "OF": 0|1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionCodes {
    /// Result was zero.
    #[serde(rename = "ZF", with = "bit")]
    pub zf: bool,
    /// Result was negative.
    #[serde(rename = "SF", with = "bit")]
    pub sf: bool,
    /// Signed overflow.
    #[serde(rename = "OF", with = "bit")]
    pub of: bool,
}

impl Default for ConditionCodes {
    /// Reset state: `ZF = 1, SF = 0, OF = 0`, as for an all-zero result.
    fn default() -> Self {
        Self {
            zf: true,
            sf: false,
            of: false,
        }
    }
}

impl ConditionCodes {
    /// Builds flags from explicit values.
    pub const fn new(zf: bool, sf: bool, of: bool) -> Self {
        Self { zf, sf, of }
    }

    /// Evaluates a branch / move condition against these flags.
    pub const fn holds(&self, cond: Cond) -> bool {
        let lt = self.sf ^ self.of;
        match cond {
            Cond::Always => true,
            Cond::Le => lt || self.zf,
            Cond::L => lt,
            Cond::E => self.zf,
            Cond::Ne => !self.zf,
            Cond::Ge => !lt,
            Cond::G => !lt && !self.zf,
        }
    }
}

/// Serializes a flag as the integer `0` or `1`.
mod bit {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(u8::from(*v))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        match u8::deserialize(d)? {
            0 => Ok(false),
            1 => Ok(true),
            n => Err(de::Error::custom(format!("flag must be 0 or 1, got {n}"))),
        }
    }
}
