use serde::Serialize;

use crate::char_codes::{CharacterCodes, format_code_point};
use crate::classify::*;

bitflags::bitflags! {
    /// One bit per classification predicate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharFlags: u16 {
        const DIGIT = 1 << 0;
        const HEX_DIGIT = 1 << 1;
        const OCTAL_DIGIT = 1 << 2;
        const ASCII_LETTER = 1 << 3;
        const LINE_BREAK = 1 << 4;
        const WHITE_SPACE_SINGLE_LINE = 1 << 5;
        const WHITE_SPACE = 1 << 6;
        const ASCII_PRINTABLE = 1 << 7;
        const IDENTIFIER_START = 1 << 8;
        const IDENTIFIER_PART = 1 << 9;
    }
}

impl CharFlags {
    /// Flag names in bit order, e.g. `["DIGIT", "HEX_DIGIT"]`.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Run every predicate over `ch` and collect the results.
pub fn classify(ch: u32) -> CharFlags {
    let mut flags = CharFlags::empty();
    flags.set(CharFlags::DIGIT, is_digit(ch));
    flags.set(CharFlags::HEX_DIGIT, is_hex_digit(ch));
    flags.set(CharFlags::OCTAL_DIGIT, is_octal_digit(ch));
    flags.set(CharFlags::ASCII_LETTER, is_ascii_letter(ch));
    flags.set(CharFlags::LINE_BREAK, is_line_break(ch));
    flags.set(
        CharFlags::WHITE_SPACE_SINGLE_LINE,
        is_white_space_single_line(ch),
    );
    flags.set(CharFlags::WHITE_SPACE, is_white_space(ch));
    flags.set(CharFlags::ASCII_PRINTABLE, is_ascii_printable(ch));
    flags.set(CharFlags::IDENTIFIER_START, is_identifier_start(ch));
    flags.set(CharFlags::IDENTIFIER_PART, is_identifier_part(ch));
    flags
}

/// Everything the registry knows about one code point, shaped for tooling output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodePointInfo {
    pub value: u32,
    pub display: String,
    pub name: Option<&'static str>,
    pub aliases: Vec<&'static str>,
    pub flags: Vec<&'static str>,
}

impl CodePointInfo {
    pub fn new(value: u32) -> Self {
        let name = CharacterCodes::name_of(value);
        let aliases = CharacterCodes::names_of(value)
            .filter(|alias| Some(*alias) != name)
            .collect();
        Self {
            value,
            display: format_code_point(value),
            name,
            aliases,
            flags: classify(value).names(),
        }
    }
}
