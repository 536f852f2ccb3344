use anyhow::{Context, Result};
use tracing::{debug, trace};

use lexchars_codes::{CharacterCodes, CodePointEntry, CodePointInfo, ENTRIES, UnknownNameError};

use super::args::{CliArgs, Command};
use super::reporter::Reporter;

/// Run one command and return the rendered output.
pub fn run(args: &CliArgs, color: bool) -> Result<String> {
    let reporter = Reporter::new(args.format, color);
    debug!(command = ?args.command, format = ?args.format, "running command");

    match &args.command {
        Command::Code { names } => {
            let entries = resolve_names(names)?;
            reporter.render_entries(&entries)
        }
        Command::Name { values } => reporter.render_names(&describe(values)),
        Command::Classify { values } => reporter.render_classifications(&describe(values)),
        Command::List { unicode, ascii } => {
            let entries = list_entries(*unicode, *ascii);
            debug!(count = entries.len(), "listing entries");
            reporter.render_entries(&entries)
        }
    }
}

/// Resolve every name, failing on the first one that is not registered.
pub fn resolve_names(names: &[String]) -> Result<Vec<CodePointEntry>> {
    names
        .iter()
        .map(|name| {
            let entry = CharacterCodes::entry(name)
                .copied()
                .ok_or_else(|| UnknownNameError::new(name.as_str()))
                .with_context(|| format!("failed to resolve `{name}`"))?;
            trace!(name = entry.name, value = entry.value, "resolved name");
            Ok(entry)
        })
        .collect()
}

fn describe(values: &[u32]) -> Vec<CodePointInfo> {
    values.iter().copied().map(CodePointInfo::new).collect()
}

pub fn list_entries(unicode_only: bool, ascii_only: bool) -> Vec<CodePointEntry> {
    ENTRIES
        .iter()
        .filter(|entry| !unicode_only || !entry.is_ascii())
        .filter(|entry| !ascii_only || entry.is_ascii())
        .copied()
        .collect()
}
