//! Reflow escape-laden text to a column width.
//!
//! Lines are broken only at whitespace. Escape codes travel with the word
//! they touch and are never split, and by default every line break is
//! bracketed by a colour reset and a replay of the active codes so each
//! output line can be displayed on its own.
//!
//! Wrapping is tuned to match long-standing terminal output rather than to be
//! optimal: a line may reach `width + 1` columns before it is broken, a
//! whitespace run with two or more line feeds is a paragraph break that is
//! kept verbatim, and any other whitespace run collapses to a single space.

use std::borrow::Cow;

use log::debug;

use crate::{
    error::{Error, Result},
    escape::strip,
    pad::{PadOptions, pad_with_mode},
    width::WidthMode,
};

mod line_buffer;
mod words;

use line_buffer::LineBuffer;
use words::{Word, count_line_breaks, split_words};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Options controlling [`wrap_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Target column width.
    pub width: usize,
    /// Prefix for the first line of each paragraph.
    pub initial_indent: String,
    /// Prefix for every other line.
    pub subsequent_indent: String,
    /// Number of spaces a tab expands to.
    pub tab_width: usize,
    /// Pad every output line with spaces up to `width`.
    pub pad: bool,
    /// Report the narrowest and widest word.
    pub stats: bool,
    /// Reset colour before each line break and replay it afterwards.
    pub color_resets: bool,
    pub mode: WidthMode,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            tab_width: DEFAULT_TAB_WIDTH,
            pad: false,
            stats: false,
            color_resets: true,
            mode: WidthMode::Chars,
        }
    }
}

impl WrapOptions {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_indent(mut self, indent: impl Into<String>) -> Self {
        self.initial_indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: bool) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_color_resets(mut self, color_resets: bool) -> Self {
        self.color_resets = color_resets;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: WidthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that the options describe a usable layout.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a zero width, a zero tab width,
    /// or an indent containing a line break.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid("wrap width must be positive"));
        }
        if self.tab_width == 0 {
            return Err(Error::invalid("tab width must be positive"));
        }
        if self.initial_indent.contains('\n') || self.subsequent_indent.contains('\n') {
            return Err(Error::invalid("indent must not contain a line break"));
        }
        Ok(())
    }
}

/// Narrowest and widest word seen while wrapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordStats {
    pub min_word_width: usize,
    pub max_word_width: usize,
}

impl WordStats {
    fn record(stats: &mut Option<Self>, width: usize) {
        match stats {
            Some(s) => {
                s.min_word_width = s.min_word_width.min(width);
                s.max_word_width = s.max_word_width.max(width);
            }
            None => {
                *stats = Some(Self {
                    min_word_width: width,
                    max_word_width: width,
                });
            }
        }
    }
}

/// Result of [`wrap_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    pub text: String,
    /// Present when [`WrapOptions::stats`] was requested.
    pub stats: Option<WordStats>,
}

/// Wrap `text` to `width` codepoints with default options.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `width` is zero.
///
/// ```
/// let out = ansitext::wrap("\x1b[31mred fox\x1b[0m jumps", 4)?;
/// assert_eq!(out, "\x1b[31mred\x1b[0m\n\x1b[31mfox\x1b[0m\njumps");
/// # Ok::<(), ansitext::Error>(())
/// ```
pub fn wrap(text: &str, width: usize) -> Result<String> {
    wrap_with(text, &WrapOptions::new(width)).map(|w| w.text)
}

/// Wrap `text` to `width` display columns with default options.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `width` is zero.
pub fn display_wrap(text: &str, width: usize) -> Result<String> {
    let opts = WrapOptions::new(width).with_mode(WidthMode::Display);
    wrap_with(text, &opts).map(|w| w.text)
}

fn expand_tabs(text: &str, tab_width: usize) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(tab_width)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Wrap `text` according to `opts`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when [`WrapOptions::validate`] fails.
pub fn wrap_with(text: &str, opts: &WrapOptions) -> Result<Wrapped> {
    opts.validate()?;
    let mode = opts.mode;
    let text = expand_tabs(text, opts.tab_width);
    let first = expand_tabs(&opts.initial_indent, opts.tab_width);
    let rest = expand_tabs(&opts.subsequent_indent, opts.tab_width);
    let first_width = mode.width(&first);
    let rest_width = mode.width(&rest);
    // A line may reach one column past the target before it is broken.
    let limit = opts.width + 1;

    let words = split_words(&text);
    debug!("wrapping {} tokens at width {}", words.len(), opts.width);

    let mut stats = None;
    let mut buf = LineBuffer::new(opts.color_resets);
    buf.start_line(&first, first_width);
    for (idx, word) in words.iter().enumerate() {
        let is_last = idx + 1 == words.len();
        match *word {
            Word::Space(space) => {
                let breaks = count_line_breaks(space);
                if breaks >= 2 {
                    buf.break_line(breaks);
                    buf.start_line(&first, first_width);
                } else if is_last {
                    if breaks == 1 {
                        buf.break_line(1);
                    }
                } else if buf.column() + 1 > limit && buf.has_word() {
                    buf.break_line(1);
                    buf.start_line(&rest, rest_width);
                } else {
                    buf.push_space();
                }
            }
            Word::Text(word) => {
                let width = mode.width(word);
                if opts.stats && has_visible_text(word) {
                    WordStats::record(&mut stats, width);
                }
                if buf.column() + width > limit && buf.has_word() {
                    buf.break_line(1);
                    buf.start_line(&rest, rest_width);
                }
                buf.push_word(word, width);
            }
        }
    }

    let mut out = buf.into_text();
    if opts.pad {
        out = pad_lines(&out, opts.width, mode);
    }
    Ok(Wrapped {
        text: out,
        stats: if opts.stats {
            Some(stats.unwrap_or_default())
        } else {
            None
        },
    })
}

/// Whether `word` has visible content besides escape codes.
fn has_visible_text(word: &str) -> bool {
    !strip(word).is_empty()
}

fn pad_lines(text: &str, width: usize, mode: WidthMode) -> String {
    let opts = PadOptions::new();
    let mut lines: Vec<&str> = text.split('\n').collect();
    let trailing_break = lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty());
    if trailing_break {
        lines.pop();
    }
    let mut out = lines
        .into_iter()
        .map(|line| pad_with_mode(mode, line, width, &opts))
        .collect::<Vec<_>>()
        .join("\n");
    if trailing_break {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
