use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use lexchars::cli::args::CliArgs;
use lexchars::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if LEXCHARS_LOG or RUST_LOG is set (zero cost otherwise).
    lexchars::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = !args.no_color && std::io::stdout().is_terminal();

    let output = driver::run(&args, color)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
