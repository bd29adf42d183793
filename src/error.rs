//! Error type for option validation.
//!
//! Measuring and transforming text never fails: unrecognised escape-like
//! sequences are simply treated as literal text. The only failures are
//! nonsensical caller-supplied options, reported as
//! [`Error::InvalidArgument`].

use thiserror::Error;

/// Errors returned when validating caller-supplied options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A width, alignment, fill character or other option is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
