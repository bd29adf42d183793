//! Recognise and isolate ANSI escape sequences.
//!
//! Only the two-character CSI form is recognised: `ESC [`, optionally
//! followed by numeric parameters separated by `;`, terminated by one byte in
//! the range `@` through `~`. Other escape sequences, 8-bit introducers and
//! malformed codes are left in place as ordinary text.
//!
//! The split functions produce an *alternating stream*: a vector whose even
//! slots hold text (possibly empty) and whose odd slots hold escape codes.
//! Concatenating the stream always reproduces the input.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::macros::lazy_regex;

/// Matches a single CSI escape sequence.
pub(crate) static ESCAPE_RE: LazyLock<Regex> = lazy_regex!(
    r"\x1b\[(?:[0-9]+(?:;[0-9]+)*)?[@-~]",
    "escape sequence regex should compile",
);

/// A piece of escape-laden text.
///
/// The `'a` lifetime ties each token to the source string, so splitting never
/// allocates per token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text without escape codes.
    Text(&'a str),
    /// A single escape code, or a run of adjacent codes when grouped.
    Code(&'a str),
}

impl<'a> Token<'a> {
    /// The source slice covered by this token.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(s) | Token::Code(s) => s,
        }
    }

    /// Whether this token is an escape code.
    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self, Token::Code(_))
    }
}

/// Return `true` if `text` contains at least one escape sequence.
///
/// ```
/// assert!(!ansitext::detect("red"));
/// assert!(ansitext::detect("\x1b[31mred"));
/// ```
#[must_use]
pub fn detect(text: &str) -> bool {
    ESCAPE_RE.is_match(text)
}

/// Remove every escape sequence from `text`.
///
/// Returns the input borrowed when it contains no codes.
///
/// ```
/// assert_eq!(ansitext::strip("\x1b[31mred\x1b[0m"), "red");
/// ```
#[must_use]
pub fn strip(text: &str) -> Cow<'_, str> {
    ESCAPE_RE.replace_all(text, "")
}

/// Concatenate every escape sequence in `text`, dropping the literal text.
#[must_use]
pub fn extract_codes(text: &str) -> String {
    ESCAPE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split `text` into alternating text and code slots, coalescing adjacent
/// codes into one slot.
///
/// ```
/// let parts = ansitext::split_codes("\x1b[1m\x1b[31ma\x1b[0m");
/// assert_eq!(parts, ["", "\x1b[1m\x1b[31m", "a", "\x1b[0m"]);
/// ```
#[must_use]
pub fn split_codes(text: &str) -> Vec<&str> {
    split_alternating(text, true)
}

/// Split `text` into alternating text and code slots, one code per slot.
///
/// Two adjacent codes are separated by an empty text slot.
#[must_use]
pub fn split_codes_single(text: &str) -> Vec<&str> {
    split_alternating(text, false)
}

/// Like [`split_codes`] / [`split_codes_single`], but tags every slot with
/// its kind. Empty text slots are kept so indices line up with the untagged
/// forms.
#[must_use]
pub fn split_codes_tagged(text: &str, grouped: bool) -> Vec<Token<'_>> {
    split_alternating(text, grouped)
        .into_iter()
        .enumerate()
        .map(|(idx, part)| {
            if idx % 2 == 0 {
                Token::Text(part)
            } else {
                Token::Code(part)
            }
        })
        .collect()
}

/// Tokenize `text` into individual codes and non-empty text runs.
#[must_use]
pub fn tokens(text: &str) -> Vec<Token<'_>> {
    split_codes_tagged(text, false)
        .into_iter()
        .filter(|tok| !matches!(tok, Token::Text("")))
        .collect()
}

fn split_alternating(text: &str, grouped: bool) -> Vec<&str> {
    let mut out = Vec::new();
    let mut last = 0;
    let mut group_start = 0;
    for m in ESCAPE_RE.find_iter(text) {
        if grouped && !out.is_empty() && m.start() == last {
            // Adjacent to the previous code: widen its slot.
            out.pop();
            out.push(&text[group_start..m.end()]);
        } else {
            out.push(&text[last..m.start()]);
            out.push(m.as_str());
            group_start = m.start();
        }
        last = m.end();
    }
    if last < text.len() {
        out.push(&text[last..]);
    }
    out
}
