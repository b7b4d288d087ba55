//! # Lempel-Ziv-Welch (LZW)
//!
//! *Adaptive dictionary compression with variable-width codes.*
//!
//! ## Intuition First
//!
//! Imagine reading a book while keeping a notebook of phrases. Every time a
//! phrase you already know is followed by one more word, you jot down the
//! longer phrase as a new entry. From then on, whenever that phrase appears you
//! write its entry number instead of the words.
//!
//! LZW does exactly this over a symbol alphabet. The dictionary starts with
//! every single-symbol string, grows by one entry per emitted code, and is
//! never transmitted: the decoder replays the identical insertion rule and
//! rebuilds the dictionary in lock-step with the encoder.
//!
//! ## The Problem
//!
//! Statistical coders (Huffman, arithmetic, ANS) need a probability model
//! before they can code a single symbol. LZW needs no model and no second
//! pass: it adapts to repetition as the data streams through, which is why the
//! image and archive formats of the 1980s adopted it wholesale.
//!
//! ## Historical Context
//!
//! ```text
//! 1977  Ziv & Lempel   LZ77: sliding-window phrase matching
//! 1978  Ziv & Lempel   LZ78: explicit phrase dictionary
//! 1984  Welch          LZW: dictionary pre-seeded with all single symbols
//! 1985  compress(1)    LZW ships with Unix
//! 1987  CompuServe     GIF adopts variable-width LZW with a 12-bit ceiling
//! 1992  TIFF 6.0       LZW filter with early code-width change
//! 1994  Unisys         patent enforcement; the backlash produces PNG
//! 2004  (expiry)       the last LZW patents lapse worldwide
//! ```
//!
//! ## How Codes Are Sized
//!
//! Codes start at `root_size + 1` bits (wide enough for every literal plus
//! the two control codes) and widen one bit at a time as the dictionary
//! fills, up to 12 bits. With `next` entries in the dictionary and codes `w`
//! bits wide, the stream maintains `2^(w-1) <= next <= 2^w`. Once all 4096
//! entries are taken the encoder emits the Clear Code, both sides drop every
//! learned entry, and the width falls back to `root_size + 1`.
//!
//! ## Complexity Analysis
//!
//! - **Time**: O(1) amortized per symbol (one hash lookup per extension).
//! - **Space**: bounded by the 4096-entry table on either side.
//!
//! ## Failure Modes
//!
//! 1. **Expansion**: incompressible input costs up to 12 bits per emitted
//!    code; LZW only wins once phrases repeat.
//! 2. **Truncation**: a stream cut off before End-of-Information fails with
//!    [`Error::TruncatedStream`] rather than yielding a partial result.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`bits`]: the variable-width code to byte serialization layer.
//! - [`dict`]: the bounded bidirectional string table.
//! - [`encoder`] / [`decoder`]: the two symmetric state machines.
//!
//! ## Examples
//!
//! ```
//! let data = [0u16, 0, 1, 3];
//!
//! let compressed = lzw::encode(2, &data).unwrap();
//! assert_eq!(compressed, [0x04, 0x62, 0x0A]);
//!
//! let decompressed = lzw::decode(2, &compressed).unwrap();
//! assert_eq!(decompressed, data);
//! ```
//!
//! ## References
//!
//! - Welch, T. (1984). "A Technique for High-Performance Data Compression."
//! - Ziv, J., Lempel, A. (1978). "Compression of Individual Sequences via
//!   Variable-Rate Coding."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod decoder;
pub mod dict;
pub mod encoder;
pub mod error;

pub use decoder::decode;
pub use dict::{Code, Symbol};
pub use encoder::{encode, Encoder};
pub use error::Error;
