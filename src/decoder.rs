//! The decompressing state machine.
//!
//! The decoder reads codes at the width its own dictionary size dictates,
//! expands each into a symbol run, and learns the entry the encoder inserted
//! when it emitted that code: the previous run extended by the new run's first
//! symbol. A code may name the entry the encoder created on the very run it
//! just emitted, before this side has materialized it; that run is rebuilt
//! from the previous run and its own first symbol.

use crate::bits::BitReader;
use crate::dict::{check_root_size, Dictionary, Symbol, MAX_WIDTH};
use crate::error::{Error, Result};

/// Decompress an LZW byte stream produced with the same `root_size`.
///
/// # Errors
/// Returns [`Error::InvalidRootSize`] unless `root_size` is in `2..=10`,
/// [`Error::TruncatedStream`] if the bytes run out before End-of-Information,
/// and [`Error::CorruptCode`] for a code beyond the dictionary's next entry.
pub fn decode(root_size: u8, data: &[u8]) -> Result<Vec<Symbol>> {
    check_root_size(root_size)?;

    let mut dict = Dictionary::new(root_size);
    let clear = dict.clear_code();
    let end = dict.end_code();

    let mut reader = BitReader::new(data);
    let mut width = root_size + 1;
    let mut previous: Vec<Symbol> = Vec::new();
    let mut output = Vec::new();

    loop {
        let code = reader.read(width)?;

        if code == clear {
            dict.reset();
            width = root_size + 1;
            previous.clear();
            continue;
        }
        if code == end {
            return Ok(output);
        }

        let emitted = match dict.string(code) {
            Some(string) => string.to_vec(),
            None if code as usize == dict.next_index() && !previous.is_empty() => {
                // The encoder assigned this code on the run it just emitted;
                // that run is the previous one extended by its own first
                // symbol.
                let mut string = previous.clone();
                string.push(previous[0]);
                string
            }
            None => return Err(Error::CorruptCode(code)),
        };

        if previous.is_empty() {
            // First code after a reset: nothing to extend yet.
            output.extend_from_slice(&emitted);
            previous = emitted;
            continue;
        }

        let mut entry = previous.clone();
        entry.push(emitted[0]);
        dict.insert(entry);

        output.extend_from_slice(&emitted);
        previous = emitted;

        // The boundary sits one entry below the encoder's check; this side
        // runs one insertion behind, so both cross before the same code.
        if dict.next_index() == (1usize << width) - 1 && width < MAX_WIDTH {
            width += 1;
        }
    }
}
