//! Canonical normalizer - sorts a decklist into its canonical layout
//!
//! # Pipeline
//!
//! `text → parse → normalize_decklist → serialize_canonical`
//!
//! # Guarantees
//!
//! - **Idempotent**: `format(format(x)) == format(x)`
//! - **Deterministic**: sorting is ordinal on an upper-cased key
//! - **Stable**: cards with equal keys keep their relative order

use crate::parser::lines::split_spaces;
use crate::{Block, Decklist, Result};

// ── Public API ─────────────────────────────────────────────

/// Format decklist text into canonical layout
///
/// Text without any line break is returned unchanged and a warning is
/// logged; see [`try_format`] for the fallible variant.
pub fn format(text: &str) -> String {
    match try_format(text) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::warn!("{}; leaving input unchanged", e);
            text.to_string()
        }
    }
}

/// Format decklist text into canonical layout
///
/// # Errors
/// Returns `InvalidFormat` if the text contains no line break.
pub fn try_format(text: &str) -> Result<String> {
    let deck = crate::parser::parse(text)?;
    let deck = normalize_decklist(deck);
    Ok(serialize_canonical(&deck))
}

/// Sort every block of a parsed decklist by card name
pub fn normalize_decklist(mut deck: Decklist) -> Decklist {
    for block in &mut deck.blocks {
        sort_block(block);
    }
    deck
}

/// Sort one block by [`card_sort_key`], keeping ties in source order
pub fn sort_block(block: &mut Block) {
    block.lines.sort_by_cached_key(|line| card_sort_key(line));
}

/// Sort key of a card line: the name without its quantity, upper-cased
///
/// The line is split on whitespace runs, the first segment is dropped
/// and the rest re-joined with single spaces, so `4  Lightning   Bolt`
/// sorts as `LIGHTNING BOLT`. Leading whitespace makes the first segment
/// empty, so an indented `  9 Zap` keeps its quantity (`9 ZAP`), and
/// trailing whitespace leaves a trailing space in the key. A line with a
/// single token has an empty key.
pub fn card_sort_key(line: &str) -> String {
    split_spaces(line)
        .into_iter()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

// ── Canonical Serializer ───────────────────────────────────

/// Serialize a decklist to text
///
/// Lines within a block are joined by the line ending, blocks by two of
/// them, and the output always ends with exactly one line ending.
pub fn serialize_canonical(deck: &Decklist) -> String {
    let eol = deck.line_ending.as_str();
    let block_sep = eol.repeat(2);

    let mut out = deck
        .blocks
        .iter()
        .map(|block| block.lines.join(eol))
        .collect::<Vec<_>>()
        .join(&block_sep);
    out.push_str(eol);
    out
}

// ── Tests ──────────────────────────────────────────────────
