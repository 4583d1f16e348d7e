//! Decklist verifier - checks whether text is already canonical
//!
//! A decklist is valid when formatting it changes nothing. Comparison is
//! exact byte equality, so a document with the right order but a missing
//! trailing line ending or doubled blank lines is invalid.

use serde::Serialize;

use crate::normalizer;
use crate::LineEnding;

/// Result of checking one decklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// `text == format(text)`
    pub valid: bool,
    /// Line ending detected in the input, `None` if it had no line break
    pub line_ending: Option<LineEnding>,
    pub blocks: usize,
    pub cards: usize,
    /// Canonical form of the input
    #[serde(skip)]
    pub formatted: String,
}

impl CheckReport {
    /// True when the input had no line break and was passed through as is
    pub fn is_unformattable(&self) -> bool {
        self.line_ending.is_none()
    }
}

/// Returns true if `text` is already in canonical layout
pub fn is_valid(text: &str) -> bool {
    text == normalizer::format(text)
}

/// Format `text` once and report validity along with summary counts
pub fn check(text: &str) -> CheckReport {
    match crate::parser::parse(text) {
        Ok(deck) => {
            let deck = normalizer::normalize_decklist(deck);
            let formatted = normalizer::serialize_canonical(&deck);
            CheckReport {
                valid: text == formatted,
                line_ending: Some(deck.line_ending),
                blocks: deck.blocks.len(),
                cards: deck.card_lines(),
                formatted,
            }
        }
        Err(e) => {
            log::warn!("{}; leaving input unchanged", e);
            CheckReport {
                valid: true,
                line_ending: None,
                blocks: 0,
                cards: 0,
                formatted: text.to_string(),
            }
        }
    }
}
