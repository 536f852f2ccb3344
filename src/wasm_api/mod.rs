//! JavaScript-facing registry and classification APIs.
//!
//! Names follow the camelCase spelling scanners written in JS expect
//! (`isLineBreak`, `isWhiteSpaceLike`, ...).

use wasm_bindgen::prelude::*;

use lexchars_codes::{CharacterCodes, CodePointInfo};

/// Look up a code point by registry name. Returns `undefined` for unknown names.
#[wasm_bindgen(js_name = codeOf)]
pub fn code_of(name: &str) -> Option<u32> {
    CharacterCodes::try_code_of(name).ok()
}

/// Reverse lookup. Returns `undefined` when the value has no name.
#[wasm_bindgen(js_name = nameOf)]
pub fn name_of(value: u32) -> Option<String> {
    CharacterCodes::name_of(value).map(str::to_string)
}

/// Full classification of a code point as a plain JS object.
#[wasm_bindgen(js_name = describeCodePoint)]
pub fn describe_code_point(value: u32) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&CodePointInfo::new(value))?)
}

/// Check if character is a line break (LF, CR, LS, PS, NEL).
#[wasm_bindgen(js_name = isLineBreak)]
pub fn is_line_break(ch: u32) -> bool {
    lexchars_codes::is_line_break(ch)
}

/// Check if character is a single-line whitespace (not including line breaks).
#[wasm_bindgen(js_name = isWhiteSpaceSingleLine)]
pub fn is_white_space_single_line(ch: u32) -> bool {
    lexchars_codes::is_white_space_single_line(ch)
}

/// Check if character is any whitespace (including line breaks).
#[wasm_bindgen(js_name = isWhiteSpaceLike)]
pub fn is_white_space_like(ch: u32) -> bool {
    lexchars_codes::is_white_space(ch)
}

#[wasm_bindgen(js_name = isDigit)]
pub fn is_digit(ch: u32) -> bool {
    lexchars_codes::is_digit(ch)
}

#[wasm_bindgen(js_name = isOctalDigit)]
pub fn is_octal_digit(ch: u32) -> bool {
    lexchars_codes::is_octal_digit(ch)
}

#[wasm_bindgen(js_name = isHexDigit)]
pub fn is_hex_digit(ch: u32) -> bool {
    lexchars_codes::is_hex_digit(ch)
}

#[wasm_bindgen(js_name = isASCIILetter)]
pub fn is_ascii_letter(ch: u32) -> bool {
    lexchars_codes::is_ascii_letter(ch)
}

#[wasm_bindgen(js_name = isASCIIPrintable)]
pub fn is_ascii_printable(ch: u32) -> bool {
    lexchars_codes::is_ascii_printable(ch)
}

#[wasm_bindgen(js_name = isWordCharacter)]
pub fn is_word_character(ch: u32) -> bool {
    lexchars_codes::is_word_character(ch)
}

#[wasm_bindgen(js_name = isIdentifierStart)]
pub fn is_identifier_start(ch: u32) -> bool {
    lexchars_codes::is_identifier_start(ch)
}

#[wasm_bindgen(js_name = isIdentifierPart)]
pub fn is_identifier_part(ch: u32) -> bool {
    lexchars_codes::is_identifier_part(ch)
}
