//! Integration tests for the character code registry
//!
//! These tests drive the public API the way a scanner does:
//! - Comparing code points against named constants
//! - Classifying the current code point while walking source text
//! - Looking names up from data

use lexchars::codes::*;
use lexchars::wasm_api;

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Identifier(String),
    Number(String),
    Punctuation(char),
    WhiteSpace,
    NewLine,
    Unknown(char),
}

/// Minimal scanner over the registry, enough to exercise the predicates in sequence.
fn scan(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos] as u32;
        let start = pos;
        if ch == CharacterCodes::CARRIAGE_RETURN
            && chars.get(pos + 1).map(|&c| c as u32) == Some(CharacterCodes::LINE_FEED)
        {
            pos += 2;
            tokens.push(Token::NewLine);
        } else if is_line_break(ch) {
            pos += 1;
            tokens.push(Token::NewLine);
        } else if is_white_space_single_line(ch) {
            while pos < chars.len() && is_white_space_single_line(chars[pos] as u32) {
                pos += 1;
            }
            tokens.push(Token::WhiteSpace);
        } else if is_identifier_start(ch) {
            while pos < chars.len() && is_identifier_part(chars[pos] as u32) {
                pos += 1;
            }
            tokens.push(Token::Identifier(chars[start..pos].iter().collect()));
        } else if is_digit(ch) {
            while pos < chars.len() && is_digit(chars[pos] as u32) {
                pos += 1;
            }
            tokens.push(Token::Number(chars[start..pos].iter().collect()));
        } else if is_ascii_printable(ch) {
            pos += 1;
            tokens.push(Token::Punctuation(chars[start]));
        } else {
            pos += 1;
            tokens.push(Token::Unknown(chars[start]));
        }
    }

    tokens
}

#[test]
fn test_scan_simple_statement() {
    assert_eq!(
        scan("let x1 = 42;"),
        vec![
            Token::Identifier("let".into()),
            Token::WhiteSpace,
            Token::Identifier("x1".into()),
            Token::WhiteSpace,
            Token::Punctuation('='),
            Token::WhiteSpace,
            Token::Number("42".into()),
            Token::Punctuation(';'),
        ]
    );
}

#[test]
fn test_scan_line_terminators() {
    assert_eq!(
        scan("a\r\nb\u{2028}c\u{85}d"),
        vec![
            Token::Identifier("a".into()),
            Token::NewLine,
            Token::Identifier("b".into()),
            Token::NewLine,
            Token::Identifier("c".into()),
            Token::NewLine,
            Token::Identifier("d".into()),
        ]
    );
}

#[test]
fn test_scan_unicode_whitespace_and_bom() {
    assert_eq!(
        scan("\u{FEFF}a\u{3000}\u{A0}b"),
        vec![
            Token::WhiteSpace,
            Token::Identifier("a".into()),
            Token::WhiteSpace,
            Token::Identifier("b".into()),
        ]
    );
}

#[test]
fn test_scan_unicode_identifiers() {
    assert_eq!(
        scan("$caf\u{E9} _\u{200D}x"),
        vec![
            Token::Identifier("$caf\u{E9}".into()),
            Token::WhiteSpace,
            Token::Identifier("_\u{200D}x".into()),
        ]
    );
}

#[test]
fn test_scan_combining_marks_and_connectors() {
    assert_eq!(
        scan("e\u{301} a\u{203F}b \u{301}"),
        vec![
            Token::Identifier("e\u{301}".into()),
            Token::WhiteSpace,
            Token::Identifier("a\u{203F}b".into()),
            Token::WhiteSpace,
            Token::Unknown('\u{301}'),
        ]
    );
}

#[test]
fn test_scan_control_and_delete_are_unknown() {
    assert_eq!(
        scan("\u{7}\u{7F}"),
        vec![Token::Unknown('\u{7}'), Token::Unknown('\u{7F}')]
    );
}

#[test]
fn test_match_on_constants() {
    fn describe(ch: u32) -> &'static str {
        match ch {
            CharacterCodes::OPEN_BRACE | CharacterCodes::CLOSE_BRACE => "brace",
            CharacterCodes::SLASH => "slash",
            CharacterCodes::_0..=CharacterCodes::_9 => "digit",
            _ => "other",
        }
    }
    assert_eq!(describe('{' as u32), "brace");
    assert_eq!(describe('/' as u32), "slash");
    assert_eq!(describe('5' as u32), "digit");
    assert_eq!(describe('x' as u32), "other");
}

#[test]
fn test_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                ENTRIES
                    .iter()
                    .all(|entry| CharacterCodes::code_of(entry.name) == entry.value)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("thread completed"));
    }
}

#[test]
fn test_wasm_api_matches_native() {
    assert_eq!(wasm_api::code_of("comma"), Some(0x2C));
    assert_eq!(wasm_api::code_of("doesNotExist"), None);
    assert_eq!(wasm_api::name_of(0x2029), Some("paragraphSeparator".to_string()));
    assert_eq!(wasm_api::name_of(0x80), None);
    for ch in [0x09, 0x0A, 0x30, 0x41, 0x85, 0x2028, 0xFEFF, 0x4E2D] {
        assert_eq!(wasm_api::is_line_break(ch), is_line_break(ch));
        assert_eq!(wasm_api::is_white_space_like(ch), is_white_space(ch));
        assert_eq!(
            wasm_api::is_white_space_single_line(ch),
            is_white_space_single_line(ch)
        );
        assert_eq!(wasm_api::is_digit(ch), is_digit(ch));
        assert_eq!(wasm_api::is_hex_digit(ch), is_hex_digit(ch));
        assert_eq!(wasm_api::is_octal_digit(ch), is_octal_digit(ch));
        assert_eq!(wasm_api::is_ascii_letter(ch), is_ascii_letter(ch));
        assert_eq!(wasm_api::is_ascii_printable(ch), is_ascii_printable(ch));
        assert_eq!(wasm_api::is_word_character(ch), is_word_character(ch));
        assert_eq!(wasm_api::is_identifier_start(ch), is_identifier_start(ch));
        assert_eq!(wasm_api::is_identifier_part(ch), is_identifier_part(ch));
    }
}
