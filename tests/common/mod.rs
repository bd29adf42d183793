//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Assert that no line of `text` is wider than `limit` display columns.
pub fn assert_lines_within(text: &str, limit: usize) {
    for line in text.split('\n') {
        let width = ansitext::display_width(line);
        assert!(
            width <= limit,
            "line {line:?} is {width} columns wide, limit is {limit}"
        );
    }
}

/// Assert that every line of `text` leaves no colour active at its end.
///
/// Lines produced with colour resets must be independently displayable.
pub fn assert_lines_close_colour(text: &str) {
    for line in text.split('\n') {
        assert!(
            ansitext::active_state_before(line, line.len()).is_empty(),
            "line {line:?} leaks colour state"
        );
    }
}

/// A short coloured paragraph used by several suites.
pub fn coloured_paragraph() -> String {
    format!(
        "{}Lorem ipsum{} dolor sit amet, {}consectetur adipiscing{} elit, sed do \
         eiusmod tempor incididunt ut labore et dolore magna aliqua.{}",
        "\x1b[1;31m", "\x1b[0m", "\x1b[4m", "\x1b[24m", "\x1b[0m"
    )
}
