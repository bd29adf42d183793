//! Pad single-line, escape-laden text to an exact width.
//!
//! Padding is computed from the text's escape-free width, so codes never
//! count towards the target. Multi-line text must be split by the caller.

use std::{borrow::Cow, str::FromStr};

use unicode_width::UnicodeWidthChar;

use crate::{
    error::{Error, Result},
    truncate::truncate_with_mode,
    width::WidthMode,
};

/// Where padding is inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadSide {
    /// Pad after the text, leaving it flush left.
    #[default]
    Right,
    /// Pad before the text, leaving it flush right.
    Left,
    /// Split the padding, with the smaller half before the text.
    Center,
}

impl FromStr for PadSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "right" | "r" => Ok(Self::Right),
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            other => Err(Error::invalid(format!(
                "unknown pad side `{other}`, expected right, left or center"
            ))),
        }
    }
}

/// Options for [`pad`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions {
    side: PadSide,
    fill: char,
    truncate: bool,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            side: PadSide::Right,
            fill: ' ',
            truncate: false,
        }
    }
}

impl PadOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_side(mut self, side: PadSide) -> Self {
        self.side = side;
        self
    }

    /// Use `fill` as the padding character.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] unless `fill` occupies exactly one
    /// terminal column, since wider or zero-width fill would miss the target.
    pub fn with_fill(mut self, fill: char) -> Result<Self> {
        if UnicodeWidthChar::width(fill) != Some(1) {
            return Err(Error::invalid(format!(
                "fill character {fill:?} must be one column wide"
            )));
        }
        self.fill = fill;
        Ok(self)
    }

    /// Truncate text wider than the target before padding.
    #[must_use]
    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    #[must_use]
    pub fn side(&self) -> PadSide {
        self.side
    }

    #[must_use]
    pub fn fill(&self) -> char {
        self.fill
    }
}

/// Pad `text` to `width` codepoints.
///
/// ```
/// use ansitext::{PadOptions, PadSide, pad};
///
/// let opts = PadOptions::new().with_side(PadSide::Center).with_fill('.')?;
/// assert_eq!(pad("foo", 10, &opts), "...foo....");
/// # Ok::<(), ansitext::Error>(())
/// ```
#[must_use]
pub fn pad<'a>(text: &'a str, width: usize, opts: &PadOptions) -> Cow<'a, str> {
    pad_with_mode(WidthMode::Chars, text, width, opts)
}

/// Pad `text` to `width` display columns.
#[must_use]
pub fn display_pad<'a>(text: &'a str, width: usize, opts: &PadOptions) -> Cow<'a, str> {
    pad_with_mode(WidthMode::Display, text, width, opts)
}

/// Pad `text` to `width` using the given measurement strategy.
///
/// Text already at or beyond `width` is returned unchanged unless truncation
/// was requested.
#[must_use]
pub fn pad_with_mode<'a>(
    mode: WidthMode,
    text: &'a str,
    width: usize,
    opts: &PadOptions,
) -> Cow<'a, str> {
    let current = mode.width(text);
    if opts.truncate && current > width {
        let (cut, kept) = truncate_with_mode(mode, text, width);
        return Cow::Owned(fill_around(&cut, 0, width - kept, opts.fill));
    }
    let missing = width.saturating_sub(current);
    if missing == 0 {
        return Cow::Borrowed(text);
    }
    let (before, after) = match opts.side {
        PadSide::Right => (0, missing),
        PadSide::Left => (missing, 0),
        PadSide::Center => (missing / 2, missing - missing / 2),
    };
    Cow::Owned(fill_around(text, before, after, opts.fill))
}

fn fill_around(text: &str, before: usize, after: usize, fill: char) -> String {
    let mut out = String::with_capacity(text.len() + (before + after) * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, before));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, after));
    out
}
