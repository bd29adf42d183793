//! Unit tests for escape-aware wrapping.
//!
//! These cover the break thresholds, whitespace collapsing, indentation and
//! colour continuity across inserted line breaks.

use rstest::rstest;

use super::{WordStats, WrapOptions, display_wrap, wrap, wrap_with};
use crate::{error::Error, width::WidthMode};

#[test]
fn wraps_plain_paragraph() {
    let out = wrap("The quick brown fox jumps over the lazy dog", 10).unwrap();
    assert_eq!(out, "The quick\nbrown fox\njumps over\nthe lazy\ndog");
}

#[test]
fn line_may_reach_one_column_past_width() {
    assert_eq!(wrap("abcde f", 6).unwrap(), "abcde f");
    assert_eq!(wrap("abcde fg", 6).unwrap(), "abcde\nfg");
}

#[rstest]
#[case::single_newline_collapses("one\ntwo", "one two")]
#[case::spaces_collapse("one  \t two", "one two")]
#[case::paragraph_kept("one two\n\n\nthree", "one two\n\n\nthree")]
#[case::crlf_paragraph("one\r\n\r\ntwo", "one\n\ntwo")]
#[case::trailing_spaces_dropped("one two  ", "one two")]
#[case::trailing_newline_kept("one two \n", "one two\n")]
#[case::empty("", "")]
fn whitespace_handling(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(wrap(input, 80).unwrap(), expected);
}

#[test]
fn overlong_word_is_not_preceded_by_blank_line() {
    assert_eq!(
        wrap("supercalifragilistic is long", 5).unwrap(),
        "supercalifragilistic\nis\nlong"
    );
}

#[test]
fn indents_prefix_first_and_following_lines() {
    let opts = WrapOptions::new(8)
        .with_initial_indent("* ")
        .with_subsequent_indent("  ");
    let out = wrap_with("aaa bbb ccc ddd", &opts).unwrap();
    assert_eq!(out.text, "* aaa bbb\n  ccc ddd");
    assert_eq!(out.stats, None);
}

#[test]
fn tabs_in_indent_expand_to_tab_width() {
    let opts = WrapOptions::new(4).with_initial_indent("\t").with_tab_width(2);
    assert_eq!(wrap_with("ab cd", &opts).unwrap().text, "  ab\ncd");
}

#[test]
fn colour_is_reset_and_replayed_around_breaks() {
    let out = display_wrap("\x1b[32m红色 文字\x1b[0m", 4).unwrap();
    assert_eq!(out, "\x1b[32m红色\x1b[0m\n\x1b[32m文字\x1b[0m");

    let chars = wrap("\x1b[32m红色 文字\x1b[0m", 4).unwrap();
    assert_eq!(chars, "\x1b[32m红色 文字\x1b[0m");
}

#[test]
fn paragraph_breaks_replay_colour_after_indent() {
    let opts = WrapOptions::new(80).with_initial_indent("> ");
    let out = wrap_with("\x1b[31mab\n\ncd", &opts).unwrap();
    assert_eq!(out.text, "> \x1b[31mab\x1b[0m\n\n> \x1b[31mcd");
}

#[test]
fn colour_resets_can_be_disabled() {
    let opts = WrapOptions::new(3).with_color_resets(false);
    let out = wrap_with("\x1b[31mred fox\x1b[0m", &opts).unwrap();
    assert_eq!(out.text, "\x1b[31mred\nfox\x1b[0m");
}

#[test]
fn stats_report_word_widths() {
    let opts = WrapOptions::new(80).with_stats(true);
    let out = wrap_with("a bbb cc \x1b[1m", &opts).unwrap();
    assert_eq!(
        out.stats,
        Some(WordStats {
            min_word_width: 1,
            max_word_width: 3,
        })
    );

    let empty = wrap_with("", &opts).unwrap();
    assert_eq!(empty.stats, Some(WordStats::default()));
}

#[test]
fn stats_follow_width_mode() {
    let opts = WrapOptions::new(80)
        .with_stats(true)
        .with_mode(WidthMode::Display);
    let out = wrap_with("红 a", &opts).unwrap();
    assert_eq!(
        out.stats,
        Some(WordStats {
            min_word_width: 1,
            max_word_width: 2,
        })
    );
}

#[test]
fn pad_fills_each_line_to_width() {
    let opts = WrapOptions::new(4).with_pad(true);
    assert_eq!(wrap_with("aaa bbb", &opts).unwrap().text, "aaa \nbbb ");
    assert_eq!(wrap_with("aaa\n", &opts).unwrap().text, "aaa \n");
}

#[rstest]
#[case::zero_width(WrapOptions::new(0))]
#[case::zero_tab(WrapOptions::new(10).with_tab_width(0))]
#[case::multiline_indent(WrapOptions::new(10).with_subsequent_indent("\n"))]
fn rejects_invalid_options(#[case] opts: WrapOptions) {
    assert!(matches!(
        wrap_with("text", &opts),
        Err(Error::InvalidArgument(_))
    ));
}

#[rstest]
#[case("The quick brown fox jumps over the lazy dog", 10)]
#[case("\x1b[1mbold words\x1b[0m and \x1b[31mred words that run on\x1b[0m", 7)]
#[case("para one\n\npara two is longer than the width", 9)]
#[case("supercalifragilistic is long", 5)]
fn rewrapping_is_a_fixed_point(#[case] input: &str, #[case] width: usize) {
    let once = wrap(input, width).unwrap();
    assert_eq!(wrap(&once, width).unwrap(), once);
}
