//! Physical System Memory.
//!
//! This module implements the simulator's only memory device. It provides:
//! 1. **Sparse Storage:** Aligned 8-byte words kept in an ordered map; absent words read as zero.
//! 2. **Bounds Checking:** Every byte and word access is checked against the address bound.
//! 3. **Snapshot View:** The set of non-zero aligned words, ready for trace emission.
//!
//! Storage is keyed by word rather than by byte so that the non-zero word
//! view a snapshot needs is the storage itself. Zero words are never kept,
//! which keeps that invariant trivially true.

use std::collections::BTreeMap;

use crate::common::Fault;
use crate::common::constants::{MEM_MAX_SIZE, WORD_SIZE};

/// Mask selecting the byte offset inside an aligned word.
const WORD_OFFSET_MASK: u64 = WORD_SIZE - 1;

/// Bits per byte.
const BYTE_BITS: u64 = 8;

/// Sparse, bounded, byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    /// Non-zero aligned words, keyed by their base address.
    words: BTreeMap<u64, u64>,
    /// Address bound: valid addresses are `0..size`.
    size: u64,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MEM_MAX_SIZE)
    }
}

impl Memory {
    /// Creates an all-zero memory with addresses `0..size`.
    pub const fn new(size: u64) -> Self {
        Self {
            words: BTreeMap::new(),
            size,
        }
    }

    /// Creates a memory initialized from an address-to-byte image.
    ///
    /// Entries at or beyond `size` are dropped, matching the loader's
    /// treatment of out-of-range listing lines.
    ///
    /// # Arguments
    ///
    /// * `image` - Initial bytes, e.g. from [`crate::sim::loader::parse_yo`].
    /// * `size` - Address bound.
    pub fn from_image<'a>(image: impl IntoIterator<Item = (&'a u64, &'a u8)>, size: u64) -> Self {
        let mut mem = Self::new(size);
        for (&addr, &byte) in image {
            if addr < size {
                mem.put_byte(addr, byte);
            }
        }
        mem
    }

    /// Returns the address bound.
    #[inline]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Checks that `len` bytes starting at `addr` all lie below the bound.
    fn check_range(&self, addr: u64, len: u64) -> Result<(), Fault> {
        match addr.checked_add(len) {
            Some(end) if end <= self.size => Ok(()),
            _ => Err(Fault::InvalidAddress(addr)),
        }
    }

    /// Reads one byte. Addresses never written read as zero.
    pub fn read_byte(&self, addr: u64) -> Result<u8, Fault> {
        self.check_range(addr, 1)?;
        Ok(self.get_byte(addr))
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, addr: u64, byte: u8) -> Result<(), Fault> {
        self.check_range(addr, 1)?;
        self.put_byte(addr, byte);
        Ok(())
    }

    /// Reads the little-endian word at `addr` as raw bits.
    ///
    /// The access may be unaligned but must lie entirely inside memory.
    pub fn read_word(&self, addr: u64) -> Result<u64, Fault> {
        self.check_range(addr, WORD_SIZE)?;
        if addr & WORD_OFFSET_MASK == 0 {
            return Ok(self.words.get(&addr).copied().unwrap_or(0));
        }
        let mut bytes = [0u8; WORD_SIZE as usize];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = self.get_byte(addr + i as u64);
        }
        Ok(u64::from_le_bytes(bytes))
    }

    /// Reads the little-endian word at `addr` as a two's-complement value.
    pub fn read_word_signed(&self, addr: u64) -> Result<i64, Fault> {
        self.read_word(addr).map(|w| w as i64)
    }

    /// Writes `val` little-endian at `addr`.
    ///
    /// The write is all-or-nothing: if any byte of the range is out of
    /// bounds, memory is left untouched.
    pub fn write_word(&mut self, addr: u64, val: u64) -> Result<(), Fault> {
        self.check_range(addr, WORD_SIZE)?;
        if addr & WORD_OFFSET_MASK == 0 {
            self.put_word(addr, val);
            return Ok(());
        }
        for (i, b) in val.to_le_bytes().into_iter().enumerate() {
            self.put_byte(addr + i as u64, b);
        }
        Ok(())
    }

    /// Returns every non-zero aligned word as a signed value, keyed by address.
    pub fn nonzero_words(&self) -> BTreeMap<u64, i64> {
        self.words.iter().map(|(&a, &w)| (a, w as i64)).collect()
    }

    /// Number of non-zero aligned words currently stored.
    pub fn populated_words(&self) -> usize {
        self.words.len()
    }

    fn get_byte(&self, addr: u64) -> u8 {
        let base = addr & !WORD_OFFSET_MASK;
        let shift = (addr & WORD_OFFSET_MASK) * BYTE_BITS;
        self.words
            .get(&base)
            .map_or(0, |w| ((w >> shift) & 0xFF) as u8)
    }

    fn put_byte(&mut self, addr: u64, byte: u8) {
        let base = addr & !WORD_OFFSET_MASK;
        let shift = (addr & WORD_OFFSET_MASK) * BYTE_BITS;
        let old = self.words.get(&base).copied().unwrap_or(0);
        let new = (old & !(0xFF << shift)) | (u64::from(byte) << shift);
        self.put_word(base, new);
    }

    fn put_word(&mut self, base: u64, val: u64) {
        if val == 0 {
            let _ = self.words.remove(&base);
        } else {
            let _ = self.words.insert(base, val);
        }
    }
}
