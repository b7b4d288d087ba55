//! Variable-width code serialization.
//!
//! Codes are little-endian within their own width and concatenated bit by bit,
//! so byte boundaries fall anywhere inside a code. [`BitPacker`] flushes whole
//! bytes as they fill and zero-pads the unused high bits of the last partial
//! byte. [`BitReader`] recovers codes by bit-reversing each byte and slicing a
//! window out of the reversed stream; the caller supplies the width before
//! every read, since widths change mid-stream.

use crate::dict::Code;
use crate::error::{Error, Result};

/// Packs a sequence of variable-width codes into bytes.
pub struct BitPacker {
    out: Vec<u8>,
    acc: u32,
    filled: u32,
}

impl BitPacker {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            acc: 0,
            filled: 0,
        }
    }

    /// Append `code` as a `width`-bit little-endian field.
    ///
    /// `width` must be in `1..=16` and `code` must fit in `width` bits.
    pub fn push(&mut self, width: u8, code: Code) {
        debug_assert!((1..=16).contains(&width));
        debug_assert!(width == 16 || code < 1 << width);

        self.acc |= (code as u32) << self.filled;
        self.filled += width as u32;
        while self.filled >= 8 {
            self.out.push((self.acc & 0xFF) as u8);
            self.acc >>= 8;
            self.filled -= 8;
        }
    }

    /// Flush the open partial byte, if any, and return the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.out.push((self.acc & 0xFF) as u8);
        }
        self.out
    }
}

impl Default for BitPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads variable-width codes back out of a byte stream.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Bit cursor into `data`, counted in packing order.
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` with the cursor at the first bit.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read the next code as a `width`-bit field (`width` in `1..=16`).
    ///
    /// # Errors
    /// Returns [`Error::TruncatedStream`] if fewer than `width` bits remain.
    pub fn read(&mut self, width: u8) -> Result<Code> {
        debug_assert!((1..=16).contains(&width));

        let width = width as usize;
        if self.pos + width > self.data.len() * 8 {
            return Err(Error::TruncatedStream);
        }

        let byte = self.pos / 8;
        let bit = self.pos % 8;

        // Big-endian window over the byte-reversed stream; three bytes cover
        // any code of up to 16 bits starting anywhere inside the first.
        let mut window = 0u32;
        for offset in 0..3 {
            let b = self.data.get(byte + offset).copied().unwrap_or(0);
            window = (window << 8) | b.reverse_bits() as u32;
        }

        let field = (window >> (24 - bit - width)) & ((1u32 << width) - 1);
        // The field holds the code little-endian within its width; reverse it
        // back into a plain integer.
        let code = (field as u16).reverse_bits() >> (16 - width);

        self.pos += width;
        Ok(code)
    }
}
