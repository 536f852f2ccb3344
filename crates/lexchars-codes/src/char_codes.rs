//! Symbolic names for the character codes a hand-written scanner compares against.
//!
//! Every entry is available two ways:
//! - as an associated constant on [`CharacterCodes`] (`CharacterCodes::LINE_FEED`),
//!   for `==` comparisons and `match` arms in scanner hot loops
//! - as a row in [`ENTRIES`], keyed by its camelCase registry name (`"lineFeed"`),
//!   for lookups driven by data
//!
//! Published values never change. New entries are appended at the end of the
//! table so that reverse lookups keep returning the first-registered name.

use serde::Serialize;

use crate::error::UnknownNameError;

/// A single registry row: a symbolic name bound to a code point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CodePointEntry {
    pub name: &'static str,
    pub value: u32,
}

impl CodePointEntry {
    pub const fn is_ascii(&self) -> bool {
        self.value <= CharacterCodes::ASCII_MAX
    }
}

impl std::fmt::Display for CodePointEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, format_code_point(self.value))
    }
}

/// Namespace for the character code constants and registry lookups.
///
/// Never constructed; use the associated items directly.
pub struct CharacterCodes;

macro_rules! character_codes {
    ($( $(#[$attr:meta])* $konst:ident => $name:literal = $value:literal; )*) => {
        impl CharacterCodes {
            $( $(#[$attr])* pub const $konst: u32 = $value; )*
        }

        /// Every registered entry, in registration order.
        pub const ENTRIES: &[CodePointEntry] = &[
            $( CodePointEntry { name: $name, value: $value }, )*
        ];

        fn lookup(name: &str) -> Option<u32> {
            match name {
                $( $name => Some($value), )*
                _ => None,
            }
        }
    };
}

character_codes! {
    // =========================================================================
    // ASCII control characters (C0)
    // =========================================================================
    NULL_CHARACTER => "nullCharacter" = 0x00;
    START_OF_HEADING => "startOfHeading" = 0x01;
    START_OF_TEXT => "startOfText" = 0x02;
    END_OF_TEXT => "endOfText" = 0x03;
    END_OF_TRANSMISSION => "endOfTransmission" = 0x04;
    ENQUIRY => "enquiry" = 0x05;
    ACKNOWLEDGE => "acknowledge" = 0x06;
    BELL => "bell" = 0x07;
    BACKSPACE => "backspace" = 0x08;
    HORIZONTAL_TAB => "horizontalTab" = 0x09;
    LINE_FEED => "lineFeed" = 0x0A;
    VERTICAL_TAB => "verticalTab" = 0x0B;
    FORM_FEED => "formFeed" = 0x0C;
    CARRIAGE_RETURN => "carriageReturn" = 0x0D;
    SHIFT_OUT => "shiftOut" = 0x0E;
    SHIFT_IN => "shiftIn" = 0x0F;
    DATA_LINK_ESCAPE => "dataLinkEscape" = 0x10;
    DEVICE_CONTROL_1 => "deviceControl1" = 0x11;
    DEVICE_CONTROL_2 => "deviceControl2" = 0x12;
    DEVICE_CONTROL_3 => "deviceControl3" = 0x13;
    DEVICE_CONTROL_4 => "deviceControl4" = 0x14;
    NEGATIVE_ACKNOWLEDGE => "negativeAcknowledge" = 0x15;
    SYNCHRONOUS_IDLE => "synchronousIdle" = 0x16;
    END_OF_TRANSMISSION_BLOCK => "endOfTransmissionBlock" = 0x17;
    CANCEL => "cancel" = 0x18;
    END_OF_MEDIUM => "endOfMedium" = 0x19;
    SUBSTITUTE => "substitute" = 0x1A;
    ESCAPE => "escape" = 0x1B;
    FILE_SEPARATOR => "fileSeparator" = 0x1C;
    GROUP_SEPARATOR => "groupSeparator" = 0x1D;
    RECORD_SEPARATOR => "recordSeparator" = 0x1E;
    UNIT_SEPARATOR => "unitSeparator" = 0x1F;

    // =========================================================================
    // Printable ASCII: punctuation and digits
    // =========================================================================
    SPACE => "space" = 0x20;
    EXCLAMATION => "exclamation" = 0x21;
    DOUBLE_QUOTE => "doubleQuote" = 0x22;
    HASH => "hash" = 0x23;
    DOLLAR => "dollar" = 0x24;
    PERCENT => "percent" = 0x25;
    AMPERSAND => "ampersand" = 0x26;
    SINGLE_QUOTE => "singleQuote" = 0x27;
    OPEN_PAREN => "openParen" = 0x28;
    CLOSE_PAREN => "closeParen" = 0x29;
    ASTERISK => "asterisk" = 0x2A;
    PLUS => "plus" = 0x2B;
    COMMA => "comma" = 0x2C;
    MINUS => "minus" = 0x2D;
    DOT => "dot" = 0x2E;
    SLASH => "slash" = 0x2F;
    _0 => "num0" = 0x30;
    _1 => "num1" = 0x31;
    _2 => "num2" = 0x32;
    _3 => "num3" = 0x33;
    _4 => "num4" = 0x34;
    _5 => "num5" = 0x35;
    _6 => "num6" = 0x36;
    _7 => "num7" = 0x37;
    _8 => "num8" = 0x38;
    _9 => "num9" = 0x39;
    COLON => "colon" = 0x3A;
    SEMICOLON => "semicolon" = 0x3B;
    LESS_THAN => "lessThan" = 0x3C;
    EQUALS => "equals" = 0x3D;
    GREATER_THAN => "greaterThan" = 0x3E;
    QUESTION => "question" = 0x3F;
    AT => "at" = 0x40;

    // =========================================================================
    // Printable ASCII: uppercase letters
    // =========================================================================
    UPPER_A => "A" = 0x41;
    UPPER_B => "B" = 0x42;
    UPPER_C => "C" = 0x43;
    UPPER_D => "D" = 0x44;
    UPPER_E => "E" = 0x45;
    UPPER_F => "F" = 0x46;
    UPPER_G => "G" = 0x47;
    UPPER_H => "H" = 0x48;
    UPPER_I => "I" = 0x49;
    UPPER_J => "J" = 0x4A;
    UPPER_K => "K" = 0x4B;
    UPPER_L => "L" = 0x4C;
    UPPER_M => "M" = 0x4D;
    UPPER_N => "N" = 0x4E;
    UPPER_O => "O" = 0x4F;
    UPPER_P => "P" = 0x50;
    UPPER_Q => "Q" = 0x51;
    UPPER_R => "R" = 0x52;
    UPPER_S => "S" = 0x53;
    UPPER_T => "T" = 0x54;
    UPPER_U => "U" = 0x55;
    UPPER_V => "V" = 0x56;
    UPPER_W => "W" = 0x57;
    UPPER_X => "X" = 0x58;
    UPPER_Y => "Y" = 0x59;
    UPPER_Z => "Z" = 0x5A;

    OPEN_BRACKET => "openBracket" = 0x5B;
    BACKSLASH => "backslash" = 0x5C;
    CLOSE_BRACKET => "closeBracket" = 0x5D;
    CARET => "caret" = 0x5E;
    UNDERSCORE => "underscore" = 0x5F;
    BACKTICK => "backtick" = 0x60;

    // =========================================================================
    // Printable ASCII: lowercase letters
    // =========================================================================
    LOWER_A => "a" = 0x61;
    LOWER_B => "b" = 0x62;
    LOWER_C => "c" = 0x63;
    LOWER_D => "d" = 0x64;
    LOWER_E => "e" = 0x65;
    LOWER_F => "f" = 0x66;
    LOWER_G => "g" = 0x67;
    LOWER_H => "h" = 0x68;
    LOWER_I => "i" = 0x69;
    LOWER_J => "j" = 0x6A;
    LOWER_K => "k" = 0x6B;
    LOWER_L => "l" = 0x6C;
    LOWER_M => "m" = 0x6D;
    LOWER_N => "n" = 0x6E;
    LOWER_O => "o" = 0x6F;
    LOWER_P => "p" = 0x70;
    LOWER_Q => "q" = 0x71;
    LOWER_R => "r" = 0x72;
    LOWER_S => "s" = 0x73;
    LOWER_T => "t" = 0x74;
    LOWER_U => "u" = 0x75;
    LOWER_V => "v" = 0x76;
    LOWER_W => "w" = 0x77;
    LOWER_X => "x" = 0x78;
    LOWER_Y => "y" = 0x79;
    LOWER_Z => "z" = 0x7A;

    OPEN_BRACE => "openBrace" = 0x7B;
    BAR => "bar" = 0x7C;
    CLOSE_BRACE => "closeBrace" = 0x7D;
    TILDE => "tilde" = 0x7E;

    DELETE => "delete" = 0x7F;
    /// Highest ASCII code point, inclusive. Same value as [`CharacterCodes::DELETE`].
    ASCII_MAX => "asciiMax" = 0x7F;

    // =========================================================================
    // Unicode whitespace and line terminators
    // =========================================================================
    /// NEL, treated as a line terminator.
    NEXT_LINE => "nextLine" = 0x0085;
    NON_BREAKING_SPACE => "nonBreakingSpace" = 0x00A0;
    OGHAM => "ogham" = 0x1680;
    EN_QUAD => "enQuad" = 0x2000;
    EM_QUAD => "emQuad" = 0x2001;
    EN_SPACE => "enSpace" = 0x2002;
    EM_SPACE => "emSpace" = 0x2003;
    THREE_PER_EM_SPACE => "threePerEmSpace" = 0x2004;
    FOUR_PER_EM_SPACE => "fourPerEmSpace" = 0x2005;
    SIX_PER_EM_SPACE => "sixPerEmSpace" = 0x2006;
    FIGURE_SPACE => "figureSpace" = 0x2007;
    PUNCTUATION_SPACE => "punctuationSpace" = 0x2008;
    THIN_SPACE => "thinSpace" = 0x2009;
    HAIR_SPACE => "hairSpace" = 0x200A;
    ZERO_WIDTH_SPACE => "zeroWidthSpace" = 0x200B;
    /// ZWNJ. Allowed inside identifiers, never at the start.
    ZERO_WIDTH_NON_JOINER => "zeroWidthNonJoiner" = 0x200C;
    /// ZWJ. Allowed inside identifiers, never at the start.
    ZERO_WIDTH_JOINER => "zeroWidthJoiner" = 0x200D;
    LINE_SEPARATOR => "lineSeparator" = 0x2028;
    PARAGRAPH_SEPARATOR => "paragraphSeparator" = 0x2029;
    NARROW_NO_BREAK_SPACE => "narrowNoBreakSpace" = 0x202F;
    MATHEMATICAL_SPACE => "mathematicalSpace" = 0x205F;
    IDEOGRAPHIC_SPACE => "ideographicSpace" = 0x3000;
    /// U+FEFF. A signature at offset 0, whitespace anywhere else.
    BYTE_ORDER_MARK => "byteOrderMark" = 0xFEFF;
    REPLACEMENT_CHARACTER => "replacementCharacter" = 0xFFFD;
}

impl CharacterCodes {
    /// Largest Unicode code point. A bound, not a registered name.
    pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

    /// Look up the code point registered under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not registered. Names are fixed at build time, so an
    /// unknown name is a typo in the caller; use [`CharacterCodes::try_code_of`]
    /// when the name comes from user input.
    #[track_caller]
    pub fn code_of(name: &str) -> u32 {
        match Self::try_code_of(name) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Look up the code point registered under `name`.
    pub fn try_code_of(name: &str) -> Result<u32, UnknownNameError> {
        lookup(name).ok_or_else(|| UnknownNameError::new(name))
    }

    /// First-registered name for `value`, if it has one.
    ///
    /// Most Unicode code points have no name; `None` is the normal answer for them.
    pub fn name_of(value: u32) -> Option<&'static str> {
        if let Some(name) = ASCII_NAMES.get(value as usize) {
            return *name;
        }
        ENTRIES
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.name)
    }

    /// Full registry row for `name`.
    pub fn entry(name: &str) -> Option<&'static CodePointEntry> {
        ENTRIES.iter().find(|entry| entry.name == name)
    }

    /// Every name bound to `value`, aliases included, in registration order.
    pub fn names_of(value: u32) -> impl Iterator<Item = &'static str> {
        ENTRIES
            .iter()
            .filter(move |entry| entry.value == value)
            .map(|entry| entry.name)
    }
}

/// Reverse index for the ASCII half of the table, one slot per code point.
const ASCII_NAMES: [Option<&'static str>; 128] = build_ascii_names();

const fn build_ascii_names() -> [Option<&'static str>; 128] {
    let mut names: [Option<&'static str>; 128] = [None; 128];
    let mut i = 0;
    while i < ENTRIES.len() {
        let entry = &ENTRIES[i];
        let slot = entry.value as usize;
        // First registration wins, so `delete` shadows `asciiMax`.
        if slot < names.len() && names[slot].is_none() {
            names[slot] = Some(entry.name);
        }
        i += 1;
    }
    names
}

/// Format a code point the way Unicode charts do (`U+000A`, `U+1F600`).
pub fn format_code_point(value: u32) -> String {
    format!("U+{value:04X}")
}
