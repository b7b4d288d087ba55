//! The bounded code-to-string table shared by both pipelines.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A single uncompressed unit: an integer in `[0, 2^root_size - 1]`.
pub type Symbol = u16;

/// A compressed token: a literal, a control code, or a learned run.
pub type Code = u16;

/// Widest code ever put on the wire.
pub const MAX_WIDTH: u8 = 12;

/// Total code space implied by [`MAX_WIDTH`].
pub const MAX_ENTRIES: usize = 1 << MAX_WIDTH;

/// Reject root sizes whose alphabet plus control codes cannot fit in
/// [`MAX_WIDTH`]-bit codes.
pub(crate) fn check_root_size(root_size: u8) -> Result<()> {
    if (2..=10).contains(&root_size) {
        Ok(())
    } else {
        Err(Error::InvalidRootSize(root_size))
    }
}

/// Bidirectional store mapping codes to symbol runs, capped at
/// [`MAX_ENTRIES`] entries.
///
/// Encoder and decoder each own a copy and apply the identical insertion rule,
/// so the two tables never diverge even though neither is ever transmitted.
/// Codes `0..2^root_size` are the literals, followed by the Clear Code and the
/// End-of-Information code; learned runs start right after.
pub struct Dictionary {
    root_size: u8,
    /// Code to string, indexed by code. The two control slots stay empty.
    strings: Vec<Vec<Symbol>>,
    /// String to code, for the encoder's longest-match lookup.
    codes: HashMap<Vec<Symbol>, Code>,
}

impl Dictionary {
    /// Create a table seeded with every single-symbol string.
    pub fn new(root_size: u8) -> Self {
        let alphabet = 1usize << root_size;
        let mut strings = Vec::with_capacity(alphabet + 2);
        let mut codes = HashMap::with_capacity(alphabet);
        for s in 0..alphabet {
            strings.push(vec![s as Symbol]);
            codes.insert(vec![s as Symbol], s as Code);
        }
        strings.push(Vec::new()); // Clear Code slot
        strings.push(Vec::new()); // End-of-Information slot

        Self {
            root_size,
            strings,
            codes,
        }
    }

    /// The reserved code that resets the table mid-stream.
    pub fn clear_code(&self) -> Code {
        1 << self.root_size
    }

    /// The reserved code that terminates the stream.
    pub fn end_code(&self) -> Code {
        self.clear_code() + 1
    }

    /// Index the next insertion will occupy.
    pub fn next_index(&self) -> usize {
        self.strings.len()
    }

    /// Look up the symbol run behind `code`.
    ///
    /// Returns `None` for unassigned codes and for the two control slots.
    pub fn string(&self, code: Code) -> Option<&[Symbol]> {
        match self.strings.get(code as usize) {
            Some(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Look up the code for an exact symbol run.
    pub fn code(&self, string: &[Symbol]) -> Option<Code> {
        self.codes.get(string).copied()
    }

    /// Add `string` at [`Self::next_index`].
    ///
    /// A no-op returning `false` once the table holds [`MAX_ENTRIES`] entries.
    pub fn insert(&mut self, string: Vec<Symbol>) -> bool {
        if self.strings.len() >= MAX_ENTRIES {
            return false;
        }
        self.codes.insert(string.clone(), self.strings.len() as Code);
        self.strings.push(string);
        true
    }

    /// Drop every learned entry, restoring the initial single-symbol table.
    pub fn reset(&mut self) {
        let alphabet = 1usize << self.root_size;
        self.strings.truncate(alphabet + 2);
        // Learned runs are always at least two symbols long; the literals are
        // exactly the length-one keys.
        self.codes.retain(|string, _| string.len() == 1);
    }
}
