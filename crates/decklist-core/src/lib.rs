//! Decklist Core - canonical layout for plain-text deck lists
//!
//! Deck lists exported from MTGO are plain text: one card entry per line
//! (`4 Lightning Bolt`), groups of entries (main deck, sideboard) separated
//! by blank lines. This crate brings such a list into one canonical form.
//!
//! # Architecture
//!
//! ```text
//! Decklist Text → Parser → Decklist → Normalizer → Canonical Text
//!                                          ↓
//!                                      Verifier → text == format(text)
//! ```
//!
//! # Guarantees
//!
//! - **Idempotent**: `format(format(x)) == format(x)`
//! - **Deterministic**: ordinal comparison only, no locale involved
//! - **Lossless**: non-blank lines are only reordered within their block

pub mod error;
pub mod normalizer;
pub mod parser;
pub mod verifier;

pub use error::{Error, Result};
pub use normalizer::{format, try_format};
pub use verifier::{check, is_valid, CheckReport};

use serde::{Deserialize, Serialize};

/// Line terminator convention of a document
///
/// Detected from the first line break of the input and reused verbatim
/// for every line of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Line ending of the first line break in `text`, if there is one
    pub fn detect(text: &str) -> Option<LineEnding> {
        parser::lines::first_line_ending(text)
    }
}

/// A run of non-blank lines, e.g. the main deck or the sideboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub lines: Vec<String>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Parsed deck list: its line ending and its non-empty blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decklist {
    pub line_ending: LineEnding,
    pub blocks: Vec<Block>,
}

impl Decklist {
    /// Total number of card lines over all blocks
    pub fn card_lines(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }
}
