//! Output accumulator for the wrapper.
//!
//! This module holds the mutable state needed while reflowing: the text
//! emitted so far, the running column of the current line, and the colour
//! state used to reset and replay codes around line breaks.

use crate::color::{ColorState, RESET};

pub(crate) struct LineBuffer<'a> {
    text: String,
    column: usize,
    /// Indent and colour replay waiting for the first content of the line.
    pending: String,
    has_word: bool,
    trailing_space: bool,
    state: ColorState<'a>,
    color_resets: bool,
}

impl<'a> LineBuffer<'a> {
    pub(crate) fn new(color_resets: bool) -> Self {
        Self {
            text: String::new(),
            column: 0,
            pending: String::new(),
            has_word: false,
            trailing_space: false,
            state: ColorState::new(),
            color_resets,
        }
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Whether a word has been emitted on the current line.
    pub(crate) fn has_word(&self) -> bool {
        self.has_word
    }

    /// Begin a new line prefixed with `indent`, which is `indent_width`
    /// columns wide.
    pub(crate) fn start_line(&mut self, indent: &str, indent_width: usize) {
        self.pending.clear();
        self.pending.push_str(indent);
        if self.color_resets {
            self.pending.push_str(&self.state.replay());
        }
        self.column = indent_width;
        self.has_word = false;
        self.trailing_space = false;
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            self.text.push_str(&self.pending);
            self.pending.clear();
        }
    }

    /// Emit a collapsed single space.
    pub(crate) fn push_space(&mut self) {
        self.flush_pending();
        self.text.push(' ');
        self.column += 1;
        self.trailing_space = true;
    }

    /// Emit `word`, which is `width` columns wide.
    pub(crate) fn push_word(&mut self, word: &'a str, width: usize) {
        self.flush_pending();
        self.text.push_str(word);
        self.state.apply_all(word);
        self.column += width;
        self.has_word = true;
        self.trailing_space = false;
    }

    /// Emit `count` line breaks, dropping a single trailing space first and
    /// resetting colour when codes are still active.
    pub(crate) fn break_line(&mut self, count: usize) {
        if self.trailing_space {
            self.text.pop();
            self.trailing_space = false;
        }
        if self.color_resets && !self.state.is_empty() {
            self.text.push_str(RESET);
        }
        for _ in 0..count {
            self.text.push('\n');
        }
        self.pending.clear();
        self.column = 0;
        self.has_word = false;
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }
}
