//! Word recogniser used by the wrapper.
//!
//! A word is a maximal run of non-whitespace characters. Escape codes contain
//! no whitespace, so codes touching a word are fused into it and travel with
//! it across line breaks. Only ASCII whitespace separates words; a
//! non-breaking space stays inside its word.

/// A unit of wrappable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Word<'a> {
    /// Non-whitespace characters together with adjacent escape codes.
    Text(&'a str),
    /// A run of whitespace, possibly containing line breaks.
    Space(&'a str),
}

/// Whitespace that separates words.
pub(crate) fn is_break_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Advance from byte `start` while `cond` holds and return the stopping
/// byte index.
fn scan_while<F>(text: &str, start: usize, mut cond: F) -> usize
where
    F: FnMut(char) -> bool,
{
    let mut idx = start;
    for ch in text[start..].chars() {
        if !cond(ch) {
            break;
        }
        idx += ch.len_utf8();
    }
    idx
}

/// Split `text` into alternating words and whitespace runs.
pub(crate) fn split_words(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut idx = 0;
    while let Some(ch) = text[idx..].chars().next() {
        if is_break_space(ch) {
            let end = scan_while(text, idx, is_break_space);
            words.push(Word::Space(&text[idx..end]));
            idx = end;
        } else {
            let end = scan_while(text, idx, |c| !is_break_space(c));
            words.push(Word::Text(&text[idx..end]));
            idx = end;
        }
    }
    words
}

/// Number of line feeds in a whitespace run; `\r\n` counts once.
pub(crate) fn count_line_breaks(space: &str) -> usize {
    space.matches('\n').count()
}
