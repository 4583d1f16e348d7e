//! Decklist parser - line splitting and block partitioning
//!
//! Converts decklist text into a [`Decklist`]: the detected line ending
//! plus the non-empty blocks, in source order and unsorted.

pub mod lines;

use crate::{Block, Decklist, Error, LineEnding, Result};

/// Parse decklist text into blocks
///
/// A line that is empty after trimming whitespace separates blocks.
/// Runs of blank lines act as one separator; leading and trailing blank
/// lines produce no blocks.
///
/// # Errors
/// Returns `InvalidFormat` if the text contains no line break at all.
pub fn parse(text: &str) -> Result<Decklist> {
    let line_ending = LineEnding::detect(text).ok_or(Error::InvalidFormat)?;
    Ok(Decklist {
        line_ending,
        blocks: partition_blocks(lines::split_lines(text)),
    })
}

/// Group lines into blocks, closing a block at every blank line
pub fn partition_blocks<'a, I>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut blocks = Vec::new();
    let mut current = Block::default();

    for line in lines {
        if line.trim_matches(lines::is_space).is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.lines.push(line.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
