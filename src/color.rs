//! Track which SGR codes are active at a point in escape-laden text.
//!
//! A [`ColorState`] is the minimal list of codes that must be replayed after a
//! full reset to reproduce the visual state at some offset. It is used to make
//! lines and columns independently colourable.

use crate::escape::{ESCAPE_RE, Token, tokens};

/// The full SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

fn is_reset(code: &str) -> bool {
    code == RESET || code == "\x1b[m"
}

fn is_sgr(code: &str) -> bool {
    code.ends_with('m')
}

/// Ordered SGR codes seen since the last full reset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorState<'a> {
    codes: Vec<&'a str>,
}

impl<'a> ColorState<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one escape code into the state.
    ///
    /// `ESC[0m` and `ESC[m` clear the state. Other SGR codes are appended.
    /// Non-SGR sequences (cursor motion, erase) leave it untouched.
    pub fn apply(&mut self, code: &'a str) {
        if is_reset(code) {
            self.codes.clear();
        } else if is_sgr(code) {
            self.codes.push(code);
        }
    }

    /// Fold every escape code found in `text` into the state.
    pub fn apply_all(&mut self, text: &'a str) {
        for m in ESCAPE_RE.find_iter(text) {
            self.apply(m.as_str());
        }
    }

    #[must_use]
    pub fn codes(&self) -> &[&'a str] {
        &self.codes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The concatenated codes needed to restore this state after a reset.
    #[must_use]
    pub fn replay(&self) -> String {
        self.codes.concat()
    }
}

/// State active just before byte `offset` of `text`.
///
/// Only codes that end at or before `offset` are applied; a code straddling
/// the offset is ignored.
///
/// ```
/// use ansitext::active_state_before;
///
/// let text = "\x1b[1ma\x1b[31mb\x1b[0mc";
/// assert_eq!(active_state_before(text, 5).codes(), ["\x1b[1m"]);
/// assert_eq!(active_state_before(text, 11).codes(), ["\x1b[1m", "\x1b[31m"]);
/// assert!(active_state_before(text, text.len()).is_empty());
/// ```
#[must_use]
pub fn active_state_before(text: &str, offset: usize) -> ColorState<'_> {
    let mut state = ColorState::new();
    for m in ESCAPE_RE.find_iter(text) {
        if m.end() > offset {
            break;
        }
        state.apply(m.as_str());
    }
    state
}

/// Make every element safe to display next to independently coloured text.
///
/// Each element except the last gets a trailing [`RESET`]; each element
/// except the first is prefixed with the codes still active at the end of
/// the previous element.
///
/// ```
/// let parts = ansitext::add_color_resets(&["\x1b[31mred", "still red"]);
/// assert_eq!(parts, ["\x1b[31mred\x1b[0m", "\x1b[31mstill red"]);
/// ```
#[must_use]
pub fn add_color_resets<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    let mut state = ColorState::new();
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            let part = part.as_ref();
            let mut out = if idx == 0 {
                String::new()
            } else {
                state.replay()
            };
            out.push_str(part);
            for tok in tokens(part) {
                if let Token::Code(code) = tok {
                    state.apply(code);
                }
            }
            if idx < last {
                out.push_str(RESET);
            }
            out
        })
        .collect()
}
