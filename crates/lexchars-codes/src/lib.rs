//! Character code registry for hand-written scanners.
//!
//! This crate provides:
//! - `CharacterCodes` - Named code point constants and name/value lookups
//! - `ENTRIES` - The registry table itself
//! - Classification predicates (`is_digit`, `is_line_break`, ...)
//! - `CharFlags` / `classify` - All predicates at once, as a bit set

pub mod char_codes;
pub use char_codes::{CharacterCodes, CodePointEntry, ENTRIES, format_code_point};

pub mod classify;
pub use classify::*;

pub mod flags;
pub use flags::{CharFlags, CodePointInfo, classify};

pub mod error;
pub use error::{ParseCodePointError, UnknownNameError};

pub mod parse;
pub use parse::parse_code_point;

#[cfg(test)]
#[path = "tests/char_codes_tests.rs"]
mod char_codes_tests;
#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod classify_tests;
#[cfg(test)]
#[path = "tests/flags_tests.rs"]
mod flags_tests;
#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod parse_tests;
#[cfg(test)]
#[path = "tests/reference_model_tests.rs"]
mod reference_model_tests;
