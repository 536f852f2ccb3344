//! Character classification predicates.
//!
//! All predicates take a raw `u32` and are total: values outside the Unicode
//! range, surrogates and unnamed code points simply return `false` where they
//! do not belong to the category.

use crate::char_codes::CharacterCodes;

/// Check if character is a line break (LF, CR, LS, PS, NEL).
#[inline]
pub const fn is_line_break(ch: u32) -> bool {
    matches!(
        ch,
        CharacterCodes::LINE_FEED
            | CharacterCodes::CARRIAGE_RETURN
            | CharacterCodes::LINE_SEPARATOR
            | CharacterCodes::PARAGRAPH_SEPARATOR
            | CharacterCodes::NEXT_LINE
    )
}

/// Check if character is a single-line whitespace (not including line breaks).
#[inline]
pub const fn is_white_space_single_line(ch: u32) -> bool {
    matches!(
        ch,
        CharacterCodes::SPACE
            | CharacterCodes::HORIZONTAL_TAB
            | CharacterCodes::VERTICAL_TAB
            | CharacterCodes::FORM_FEED
            | CharacterCodes::NON_BREAKING_SPACE
            | CharacterCodes::OGHAM
            | CharacterCodes::EN_QUAD..=CharacterCodes::ZERO_WIDTH_SPACE
            | CharacterCodes::NARROW_NO_BREAK_SPACE
            | CharacterCodes::MATHEMATICAL_SPACE
            | CharacterCodes::IDEOGRAPHIC_SPACE
            | CharacterCodes::BYTE_ORDER_MARK
    )
}

/// Check if character is any whitespace (including line breaks).
#[inline]
pub const fn is_white_space(ch: u32) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

/// Check if character is a decimal digit (0-9).
#[inline]
pub const fn is_digit(ch: u32) -> bool {
    matches!(ch, CharacterCodes::_0..=CharacterCodes::_9)
}

/// Check if character is an octal digit (0-7).
#[inline]
pub const fn is_octal_digit(ch: u32) -> bool {
    matches!(ch, CharacterCodes::_0..=CharacterCodes::_7)
}

/// Check if character is a binary digit (0-1).
#[inline]
pub const fn is_binary_digit(ch: u32) -> bool {
    ch == CharacterCodes::_0 || ch == CharacterCodes::_1
}

/// Check if character is a hexadecimal digit (0-9, A-F, a-f).
#[inline]
pub const fn is_hex_digit(ch: u32) -> bool {
    is_digit(ch)
        || matches!(
            ch,
            CharacterCodes::UPPER_A..=CharacterCodes::UPPER_F
                | CharacterCodes::LOWER_A..=CharacterCodes::LOWER_F
        )
}

#[inline]
pub const fn is_ascii_upper(ch: u32) -> bool {
    matches!(ch, CharacterCodes::UPPER_A..=CharacterCodes::UPPER_Z)
}

#[inline]
pub const fn is_ascii_lower(ch: u32) -> bool {
    matches!(ch, CharacterCodes::LOWER_A..=CharacterCodes::LOWER_Z)
}

/// Check if character is an ASCII letter (A-Z, a-z).
#[inline]
pub const fn is_ascii_letter(ch: u32) -> bool {
    is_ascii_upper(ch) || is_ascii_lower(ch)
}

/// Check if character is a word character (A-Z, a-z, 0-9, _).
#[inline]
pub const fn is_word_character(ch: u32) -> bool {
    is_ascii_letter(ch) || is_digit(ch) || ch == CharacterCodes::UNDERSCORE
}

#[inline]
pub const fn is_ascii(ch: u32) -> bool {
    ch <= CharacterCodes::ASCII_MAX
}

/// Check if character is printable ASCII (space through tilde).
///
/// `delete` shares its value with `asciiMax` and is not printable.
#[inline]
pub const fn is_ascii_printable(ch: u32) -> bool {
    matches!(ch, CharacterCodes::SPACE..=CharacterCodes::TILDE)
}

/// Check if character can start an identifier.
///
/// ASCII letters, `$` and `_`; beyond ASCII, Unicode `XID_Start`.
#[inline]
pub fn is_identifier_start(ch: u32) -> bool {
    if is_ascii(ch) {
        return is_ascii_letter(ch)
            || ch == CharacterCodes::DOLLAR
            || ch == CharacterCodes::UNDERSCORE;
    }
    char::from_u32(ch).is_some_and(unicode_ident::is_xid_start)
}

/// Check if character can continue an identifier.
///
/// Anything that can start one, plus digits, ZWNJ and ZWJ; beyond ASCII,
/// Unicode `XID_Continue` (combining marks, connector punctuation, ...).
#[inline]
pub fn is_identifier_part(ch: u32) -> bool {
    if is_ascii(ch) {
        return is_word_character(ch) || ch == CharacterCodes::DOLLAR;
    }
    ch == CharacterCodes::ZERO_WIDTH_NON_JOINER
        || ch == CharacterCodes::ZERO_WIDTH_JOINER
        || char::from_u32(ch).is_some_and(unicode_ident::is_xid_continue)
}
