//! Imports shared by the integration suites.

#[allow(unused_imports, reason = "not every suite declares fixtures")]
pub use rstest::{fixture, rstest};

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
#[allow(unused_imports, reason = "the CLI suite needs no text helpers")]
pub use common::*;
