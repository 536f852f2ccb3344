//! Reading code points written by people: `0x2028`, `U+FEFF`, `44`, or `,`.

use crate::char_codes::CharacterCodes;
use crate::error::ParseCodePointError;

/// Parse a code point from one of the accepted spellings.
///
/// - `0x` / `0X` prefix: hexadecimal
/// - `U+` / `u+` prefix: hexadecimal
/// - all ASCII digits: decimal
/// - exactly one character: that character's scalar value
///
/// The result is at most [`CharacterCodes::MAX_CODE_POINT`]. Surrogates are
/// accepted, since the predicates are defined over them too.
pub fn parse_code_point(text: &str) -> Result<u32, ParseCodePointError> {
    if text.is_empty() {
        return Err(ParseCodePointError::Empty);
    }

    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix("U+"))
        .or_else(|| text.strip_prefix("u+"));

    let value = if let Some(digits) = hex {
        parse_digits(text, digits, 16)?
    } else if text.bytes().all(|b| b.is_ascii_digit()) {
        parse_digits(text, text, 10)?
    } else {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => return Ok(ch as u32),
            _ => return Err(ParseCodePointError::InvalidDigits(text.to_string())),
        }
    };

    if value > u64::from(CharacterCodes::MAX_CODE_POINT) {
        return Err(ParseCodePointError::OutOfRange { value });
    }
    Ok(value as u32)
}

fn parse_digits(text: &str, digits: &str, radix: u32) -> Result<u64, ParseCodePointError> {
    // `from_str_radix` tolerates a leading `+`, which is not a spelling we accept.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseCodePointError::InvalidDigits(text.to_string()));
    }
    u64::from_str_radix(digits, radix).map_err(|_| ParseCodePointError::TooLarge(text.to_string()))
}
