//! Line splitting for decklist text
//!
//! Recognises `\r\n`, `\r` and `\n` as line breaks. `\r\n` is always one
//! break, never `\r` followed by an empty line.

use crate::LineEnding;

const BREAK_CHARS: [char; 2] = ['\r', '\n'];

/// Whitespace as deck list tools see it: Unicode white space plus the
/// byte-order mark, but not NEL (U+0085)
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Split a line on runs of [`is_space`]
///
/// Leading whitespace yields an empty first segment and trailing
/// whitespace an empty last one; runs inside the line count once.
pub fn split_spaces(line: &str) -> Vec<&str> {
    let pieces: Vec<&str> = line.split(is_space).collect();
    let last = pieces.len() - 1;
    pieces
        .into_iter()
        .enumerate()
        .filter(|(i, piece)| !piece.is_empty() || *i == 0 || *i == last)
        .map(|(_, piece)| piece)
        .collect()
}

/// Line ending of the first break in `text`
pub fn first_line_ending(text: &str) -> Option<LineEnding> {
    let idx = text.find(BREAK_CHARS)?;
    Some(ending_at(&text[idx..]))
}

/// Classify the break starting at the head of `rest`
fn ending_at(rest: &str) -> LineEnding {
    if rest.starts_with("\r\n") {
        LineEnding::CrLf
    } else if rest.starts_with('\r') {
        LineEnding::Cr
    } else {
        LineEnding::Lf
    }
}

/// Split `text` on any line break, dropping the separators
///
/// Mixed documents are fine: each break is recognised on its own.
/// A trailing break yields a final empty line.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.find(BREAK_CHARS) {
            Some(idx) => {
                let line = &rest[..idx];
                let width = ending_at(&rest[idx..]).as_str().len();
                self.rest = Some(&rest[idx + width..]);
                Some(line)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
