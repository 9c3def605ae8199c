//! Object Listing Loader.
//!
//! This module turns the line-oriented hex listing produced by the Y86-64
//! assembler into the address-to-byte image memory is built from. A line
//! looks like:
//!
//! ```text
//! 0x000: 30f40002000000000000 |   irmovq stack, %rsp
//! ```
//!
//! Rules:
//! 1. **Comments:** Everything after the first `|` is ignored; a line without `:` carries no data.
//! 2. **Payload:** Surrounding whitespace and inner spaces are removed and an odd number of digits is padded with a trailing `0`.
//! 3. **Placement:** Bytes go to consecutive addresses from the (hexadecimal) base address;
//!    bytes at or beyond the address bound are dropped.
//! 4. **Robustness:** A malformed line is skipped as a whole; it never aborts loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::common::LoadError;

/// Memory image: initial byte values keyed by address.
pub type Image = BTreeMap<u64, u8>;

/// Reasons a single listing line is skipped.
#[derive(Debug, Error, PartialEq, Eq)]
enum LineError {
    #[error("bad address '{0}'")]
    Address(String),
    #[error("bad hex payload '{0}'")]
    Payload(String),
}

/// Parses a complete listing.
///
/// # Arguments
///
/// * `text` - The listing.
/// * `max_addr` - Address bound; bytes at or above it are discarded.
pub fn parse_yo(text: &str, max_addr: u64) -> Image {
    parse_yo_lines(text.lines(), max_addr)
}

/// Parses a listing supplied line by line.
pub fn parse_yo_lines<I, S>(lines: I, max_addr: u64) -> Image
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut image = Image::new();
    for (lineno, line) in lines.into_iter().enumerate() {
        match parse_line(line.as_ref()) {
            Ok(Some((base, bytes))) => place(&mut image, base, &bytes, max_addr),
            Ok(None) => {}
            Err(err) => tracing::debug!(line = lineno + 1, %err, "skipping listing line"),
        }
    }
    image
}

/// Reads and parses a listing file.
///
/// # Returns
///
/// The memory image, or [`LoadError::Io`] if the file cannot be read.
pub fn load_file(path: impl AsRef<Path>, max_addr: u64) -> Result<Image, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_yo(&text, max_addr);
    tracing::debug!(path = %path.display(), bytes = image.len(), "loaded listing");
    Ok(image)
}

fn place(image: &mut Image, base: u64, bytes: &[u8], max_addr: u64) {
    if base >= max_addr {
        return;
    }
    for (offset, &byte) in (0u64..).zip(bytes) {
        match base.checked_add(offset) {
            Some(addr) if addr < max_addr => {
                let _ = image.insert(addr, byte);
            }
            _ => break,
        }
    }
}

/// Splits one line into its base address and payload bytes.
///
/// `Ok(None)` means the line carries no data (blank, comment-only, label-only).
fn parse_line(line: &str) -> Result<Option<(u64, Vec<u8>)>, LineError> {
    if !line.contains(':') {
        return Ok(None);
    }
    let code = line.split('|').next().unwrap_or("").trim();
    let Some((addr_str, hex_str)) = code.split_once(':') else {
        return Ok(None);
    };
    let mut hex: String = hex_str.trim().chars().filter(|&c| c != ' ').collect();
    if hex.is_empty() {
        return Ok(None);
    }

    let addr_str = addr_str.trim();
    let digits = addr_str
        .strip_prefix("0x")
        .or_else(|| addr_str.strip_prefix("0X"))
        .unwrap_or(addr_str);
    let base = u64::from_str_radix(digits, 16)
        .map_err(|_| LineError::Address(addr_str.to_string()))?;

    if hex.len() % 2 == 1 {
        hex.push('0');
    }
    let bytes = hex
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        })
        .collect::<Option<Vec<u8>>>()
        .ok_or(LineError::Payload(hex))?;

    Ok(Some((base, bytes)))
}
