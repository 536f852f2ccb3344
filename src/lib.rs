//! Character code registry for hand-written scanners, with WASM bindings and
//! an inspection CLI.
//!
//! The registry itself lives in `lexchars-codes` and is re-exported here:
//! - `CharacterCodes` - Named code point constants, `code_of` / `name_of`
//! - `ENTRIES` - The name to code point table
//! - Classification predicates (`is_digit`, `is_line_break`, ...)

// Initialize panic hook for WASM to prevent worker crashes
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

pub use lexchars_codes as codes;
pub use lexchars_codes::{
    CharFlags, CharacterCodes, CodePointEntry, CodePointInfo, ENTRIES, ParseCodePointError,
    UnknownNameError, classify, format_code_point, parse_code_point,
};

// JavaScript-facing exports (camelCase names)
pub mod wasm_api;

// Tracing subscriber setup, driven by LEXCHARS_LOG / LEXCHARS_LOG_FORMAT
pub mod tracing_config;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;

// Native CLI
#[cfg(feature = "cli")]
pub mod cli;
