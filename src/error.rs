//! Error types for LZW encoding and decoding.

use thiserror::Error;

use crate::dict::{Code, Symbol};

/// Error variants for LZW operations.
///
/// Every variant is unrecoverable for the current stream: there is no partial
/// result, the caller discards the attempted encode or decode.
#[derive(Debug, Error)]
pub enum Error {
    /// The root size lies outside the supported `2..=10` range.
    #[error("unsupported root size: {0} (expected 2..=10)")]
    InvalidRootSize(u8),

    /// An input symbol does not fit the `root_size`-bit alphabet.
    #[error("input symbol out of range: {0}")]
    InvalidSymbol(Symbol),

    /// The byte stream ran out before an End-of-Information code was read.
    #[error("compressed stream truncated before end-of-information")]
    TruncatedStream,

    /// A decoded code points past the dictionary's next free entry.
    #[error("corrupt code: {0} is beyond the dictionary")]
    CorruptCode(Code),
}

/// A specialized Result type for LZW operations.
pub type Result<T> = std::result::Result<T, Error>;
