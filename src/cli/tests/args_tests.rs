use clap::Parser;

use super::args::{CliArgs, Command, OutputFormat};

#[test]
fn parses_code_command() {
    let args = CliArgs::try_parse_from(["lexchars", "code", "lineFeed", "comma"])
        .expect("code args should parse");

    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.no_color);
    assert_eq!(
        args.command,
        Command::Code {
            names: vec!["lineFeed".to_string(), "comma".to_string()],
        }
    );
}

#[test]
fn parses_code_point_spellings() {
    let args = CliArgs::try_parse_from(["lexchars", "name", "0x2028", "U+FEFF", "44", ","])
        .expect("name args should parse");

    assert_eq!(
        args.command,
        Command::Name {
            values: vec![0x2028, 0xFEFF, 44, 0x2C],
        }
    );
}

#[test]
fn parses_global_format_after_subcommand() {
    let args = CliArgs::try_parse_from(["lexchars", "classify", "0x0A", "--format", "json"])
        .expect("classify args should parse");

    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn rejects_out_of_range_code_point() {
    let err = CliArgs::try_parse_from(["lexchars", "classify", "0x110000"])
        .expect_err("out of range value should fail");

    assert!(err.to_string().contains("above U+10FFFF"));
}

#[test]
fn rejects_missing_values() {
    assert!(CliArgs::try_parse_from(["lexchars", "code"]).is_err());
    assert!(CliArgs::try_parse_from(["lexchars", "name"]).is_err());
}

#[test]
fn list_filters_conflict() {
    let args = CliArgs::try_parse_from(["lexchars", "list", "--unicode"])
        .expect("list args should parse");
    assert_eq!(
        args.command,
        Command::List {
            unicode: true,
            ascii: false,
        }
    );

    assert!(CliArgs::try_parse_from(["lexchars", "list", "--unicode", "--ascii"]).is_err());
}
