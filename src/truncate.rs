//! Cut escape-laden text to a width without splitting escape codes.
//!
//! Text runs are consumed until the width budget is spent. Every escape code
//! is kept, including those after the cut, so a trailing reset always
//! survives truncation.

use std::borrow::Cow;

use log::trace;

use crate::{
    escape::{Token, tokens},
    width::WidthMode,
};

/// Truncate `text` to `width` codepoints.
///
/// ```
/// let cut = ansitext::truncate("\x1b[31mred text\x1b[0m", 5);
/// assert_eq!(cut, "\x1b[31mred t\x1b[0m");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    truncate_with_mode(WidthMode::Chars, text, width).0
}

/// Truncate `text` to `width` codepoints, also returning the width kept.
#[must_use]
pub fn truncate_measured(text: &str, width: usize) -> (Cow<'_, str>, usize) {
    truncate_with_mode(WidthMode::Chars, text, width)
}

/// Truncate `text` to `width` display columns.
#[must_use]
pub fn display_truncate(text: &str, width: usize) -> Cow<'_, str> {
    truncate_with_mode(WidthMode::Display, text, width).0
}

/// Truncate `text` to `width` display columns, also returning the width kept.
///
/// The kept width can fall short of `width` when a wide character straddles
/// the boundary; such a character is dropped rather than split.
///
/// ```
/// let (cut, kept) = ansitext::display_truncate_measured("红色", 3);
/// assert_eq!((&*cut, kept), ("红", 2));
/// ```
#[must_use]
pub fn display_truncate_measured(text: &str, width: usize) -> (Cow<'_, str>, usize) {
    truncate_with_mode(WidthMode::Display, text, width)
}

/// Truncate `text` to `width` using the given measurement strategy.
///
/// Returns the input borrowed, with its own width, when it already fits.
#[must_use]
pub fn truncate_with_mode(mode: WidthMode, text: &str, width: usize) -> (Cow<'_, str>, usize) {
    let current = mode.width(text);
    if current <= width {
        return (Cow::Borrowed(text), current);
    }

    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut exhausted = false;
    for tok in tokens(text) {
        match tok {
            Token::Code(code) => out.push_str(code),
            Token::Text(_) if exhausted => {}
            Token::Text(run) => {
                let run_width = mode.text_width(run);
                if used + run_width <= width {
                    out.push_str(run);
                    used += run_width;
                    exhausted = used == width;
                } else {
                    let (head, head_width) = cut_run(mode, run, width - used);
                    out.push_str(head);
                    used += head_width;
                    exhausted = true;
                }
            }
        }
    }
    trace!("truncated {current} columns to {used} (budget {width})");
    (Cow::Owned(out), used)
}

/// Longest prefix of `run` whose width fits `budget`, with its width.
///
/// Zero-width characters following the last fitting character are kept.
fn cut_run(mode: WidthMode, run: &str, budget: usize) -> (&str, usize) {
    let mut used = 0;
    let mut end = 0;
    for (idx, ch) in run.char_indices() {
        let w = mode.char_width(ch);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    (&run[..end], used)
}
