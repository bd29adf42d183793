//! Layout helpers for text containing ANSI escape sequences.
//!
//! Functions here measure, wrap, pad, truncate and highlight text without
//! splitting escape codes, and keep colour state from leaking across line
//! and column boundaries. Width is measured either in codepoints or, through
//! the `display_*` variants, in terminal columns using `unicode-width`.
//!
//! Every function is pure: no state is kept between calls, so inputs can be
//! processed in parallel freely.

mod macros;

pub mod color;
pub mod error;
pub mod escape;
pub mod highlight;
pub mod pad;
pub mod truncate;
pub mod width;
pub mod wrap;

pub use color::{ColorState, RESET, active_state_before, add_color_resets};
pub use error::{Error, Result};
pub use escape::{
    Token,
    detect,
    extract_codes,
    split_codes,
    split_codes_single,
    split_codes_tagged,
    strip,
    tokens,
};
pub use highlight::{Needle, highlight, highlight_all};
pub use pad::{PadOptions, PadSide, display_pad, pad, pad_with_mode};
pub use truncate::{
    display_truncate,
    display_truncate_measured,
    truncate,
    truncate_measured,
    truncate_with_mode,
};
pub use width::{Measurement, WidthMode, display_width, length, measure};
pub use wrap::{WordStats, WrapOptions, Wrapped, display_wrap, wrap, wrap_with};
