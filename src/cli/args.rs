use clap::{Parser, Subcommand, ValueEnum};

use lexchars_codes::parse_code_point;

/// CLI arguments for the lexchars binary.
#[derive(Parser, Debug)]
#[command(
    name = "lexchars",
    version,
    about = "Look up and classify scanner character codes"
)]
pub struct CliArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Disable colored text output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the code point registered under each name.
    Code {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the registered name of each code point (0x0A, U+000A, 10, or a character).
    Name {
        #[arg(required = true, value_parser = parse_code_point)]
        values: Vec<u32>,
    },
    /// Print every classification that applies to each code point.
    Classify {
        #[arg(required = true, value_parser = parse_code_point)]
        values: Vec<u32>,
    },
    /// Print the registry.
    List {
        /// Only entries above ASCII.
        #[arg(long, conflicts_with = "ascii")]
        unicode: bool,
        /// Only ASCII entries.
        #[arg(long)]
        ascii: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
