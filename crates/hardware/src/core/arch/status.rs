//! Processor status codes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Processor status.
///
/// Serializes as its numeric code (`1`..=`4`). Only `Aok` lets the run
/// loop continue; the other three are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    /// Normal operation.
    #[default]
    Aok,
    /// A `halt` instruction was executed.
    Hlt,
    /// An invalid address was accessed.
    Adr,
    /// An invalid instruction was encountered.
    Ins,
}

/// Raised when decoding a status from an out-of-range number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown status code {0}")]
pub struct InvalidStatusCode(pub u8);

impl Status {
    /// Numeric status code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Aok => 1,
            Self::Hlt => 2,
            Self::Adr => 3,
            Self::Ins => 4,
        }
    }

    /// Returns `true` for every status except `Aok`.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Aok)
    }
}

impl From<Status> for u8 {
    fn from(s: Status) -> Self {
        s.code()
    }
}

impl TryFrom<u8> for Status {
    type Error = InvalidStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Aok),
            2 => Ok(Self::Hlt),
            3 => Ok(Self::Adr),
            4 => Ok(Self::Ins),
            n => Err(InvalidStatusCode(n)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aok => "AOK",
            Self::Hlt => "HLT",
            Self::Adr => "ADR",
            Self::Ins => "INS",
        })
    }
}
