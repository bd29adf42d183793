//! Helper macros used across the crate.

/// Build a lazily compiled [`regex::Regex`] static, panicking with `$msg` if
/// the pattern is invalid.
///
/// Patterns handed to this macro are literals, so a failure is a programming
/// error caught by the first test that touches the static.
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect($msg))
    };
}

pub(crate) use lazy_regex;
