//! Width measurement for escape-laden text.
//!
//! Two strategies are offered through [`WidthMode`]: counting codepoints, and
//! counting terminal columns as reported by `unicode-width`. Every recognised
//! escape code contributes zero width in both modes, even though some real
//! sequences (cursor motion) are not zero-width on a terminal.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use unicode_width::UnicodeWidthChar;

use crate::{escape::strip, macros::lazy_regex};

static LINE_BREAK_RE: LazyLock<Regex> =
    lazy_regex!(r"\r?\n", "line break regex should compile");

/// How the width of a text fragment is measured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthMode {
    /// One column per codepoint.
    #[default]
    Chars,
    /// Terminal display columns: wide characters take two, combining marks
    /// and other zero-width codepoints take none.
    Display,
}

impl WidthMode {
    /// Width of a single character.
    ///
    /// Control characters have no defined display width and count as zero in
    /// [`WidthMode::Display`]; callers should sanitise them beforehand.
    #[must_use]
    pub fn char_width(self, ch: char) -> usize {
        match self {
            WidthMode::Chars => 1,
            WidthMode::Display => UnicodeWidthChar::width(ch).unwrap_or(0),
        }
    }

    /// Width of a fragment that is known to contain no escape codes.
    #[must_use]
    pub fn text_width(self, plain: &str) -> usize {
        match self {
            WidthMode::Chars => plain.chars().count(),
            WidthMode::Display => plain.chars().map(|ch| self.char_width(ch)).sum(),
        }
    }

    /// Width of `text` after removing escape codes.
    #[must_use]
    pub fn width(self, text: &str) -> usize {
        self.text_width(&strip(text))
    }
}

/// Codepoint count of `text` with escape codes removed.
///
/// ```
/// assert_eq!(ansitext::length("\x1b[31mred"), 3);
/// ```
#[must_use]
pub fn length(text: &str) -> usize {
    WidthMode::Chars.width(text)
}

/// Display width of `text` on a single line, escape codes removed.
///
/// ```
/// assert_eq!(ansitext::display_width("\x1b[31m红色"), 4);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize {
    WidthMode::Display.width(text)
}

/// Columns and rows occupied by a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Measurement {
    /// Display width of the widest row.
    pub width: usize,
    /// Number of rows: line breaks plus one.
    pub height: usize,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Measure the widest row and the number of rows of `text`.
///
/// Rows are separated by `\n` or `\r\n`. Empty input is one empty row.
#[must_use]
pub fn measure(text: &str) -> Measurement {
    let stripped = strip(text);
    let mut width = 0;
    let mut height = 0;
    for row in LINE_BREAK_RE.split(&stripped) {
        width = width.max(WidthMode::Display.text_width(row));
        height += 1;
    }
    Measurement {
        width,
        height: height.max(1),
    }
}
