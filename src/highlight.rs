//! Highlight matches in escape-laden text without disturbing its colours.
//!
//! Matching runs against the stripped text, so a needle may span escape
//! codes. Each match is wrapped as `RESET + highlight ... RESET + replay`,
//! where the replay restores whatever codes were active at the end of the
//! match. SGR codes inside a match are folded into that replay; any other
//! code inside a match is emitted right after it.

use std::borrow::Cow;

use regex::Regex;

use crate::{
    color::{ColorState, RESET},
    escape::{Token, tokens},
};

/// What to search for.
#[derive(Debug, Clone, Copy)]
pub enum Needle<'n> {
    /// A literal substring.
    Literal(&'n str),
    /// A regular expression. Empty matches are ignored.
    Pattern(&'n Regex),
}

impl<'n> From<&'n str> for Needle<'n> {
    fn from(s: &'n str) -> Self {
        Needle::Literal(s)
    }
}

impl<'n> From<&'n Regex> for Needle<'n> {
    fn from(re: &'n Regex) -> Self {
        Needle::Pattern(re)
    }
}

impl Needle<'_> {
    /// Byte spans of leftmost-first, non-overlapping, non-empty matches.
    fn spans(&self, haystack: &str, all: bool) -> Vec<(usize, usize)> {
        let limit = if all { usize::MAX } else { 1 };
        match self {
            Needle::Literal("") => Vec::new(),
            Needle::Literal(lit) => haystack
                .match_indices(*lit)
                .map(|(start, m)| (start, start + m.len()))
                .take(limit)
                .collect(),
            Needle::Pattern(re) => re
                .find_iter(haystack)
                .filter(|m| !m.is_empty())
                .map(|m| (m.start(), m.end()))
                .take(limit)
                .collect(),
        }
    }
}

/// Highlight the first occurrence of `needle` with `code`.
///
/// ```
/// let out = ansitext::highlight("\x1b[31mbig red dog", "red", "\x1b[7m");
/// assert_eq!(out, "\x1b[31mbig \x1b[0m\x1b[7mred\x1b[0m\x1b[31m dog");
/// ```
#[must_use]
pub fn highlight<'a, 'n>(
    text: &'a str,
    needle: impl Into<Needle<'n>>,
    code: &str,
) -> Cow<'a, str> {
    highlight_matches(text, needle.into(), code, false)
}

/// Highlight every occurrence of `needle` with `code`.
#[must_use]
pub fn highlight_all<'a, 'n>(
    text: &'a str,
    needle: impl Into<Needle<'n>>,
    code: &str,
) -> Cow<'a, str> {
    highlight_matches(text, needle.into(), code, true)
}

fn highlight_matches<'a>(
    text: &'a str,
    needle: Needle<'_>,
    code: &str,
    all: bool,
) -> Cow<'a, str> {
    let toks = tokens(text);
    let stripped: String = toks
        .iter()
        .filter_map(|tok| match tok {
            Token::Text(run) => Some(*run),
            Token::Code(_) => None,
        })
        .collect();
    let spans = needle.spans(&stripped, all);
    if spans.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + spans.len() * (2 * RESET.len() + code.len()));
    let mut state = ColorState::new();
    let mut next = spans.iter().copied().peekable();
    let mut open: Option<usize> = None;
    // Non-SGR codes met inside a match, emitted once it closes.
    let mut held: Vec<&str> = Vec::new();
    // Offset of the current run within the stripped text.
    let mut pos = 0;
    for tok in toks {
        let run = match tok {
            Token::Code(c) => {
                state.apply(c);
                if open.is_none() {
                    out.push_str(c);
                } else if !c.ends_with('m') {
                    held.push(c);
                }
                continue;
            }
            Token::Text(run) => run,
        };
        let run_end = pos + run.len();
        let mut cursor = 0;
        while cursor < run.len() {
            if let Some(end) = open {
                let stop = end.min(run_end) - pos;
                out.push_str(&run[cursor..stop]);
                cursor = stop;
                if end <= run_end {
                    out.push_str(RESET);
                    out.push_str(&state.replay());
                    out.extend(held.drain(..));
                    open = None;
                }
            } else if let Some(&(start, end)) = next.peek().filter(|(start, _)| *start < run_end) {
                let at = start - pos;
                out.push_str(&run[cursor..at]);
                out.push_str(RESET);
                out.push_str(code);
                cursor = at;
                open = Some(end);
                next.next();
            } else {
                out.push_str(&run[cursor..]);
                cursor = run.len();
            }
        }
        pos = run_end;
    }
    Cow::Owned(out)
}
