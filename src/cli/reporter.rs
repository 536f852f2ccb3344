use colored::Colorize;
use serde::Serialize;

use lexchars_codes::{CodePointEntry, CodePointInfo, format_code_point};

use super::args::OutputFormat;

/// Renders command results as text lines or a JSON array.
pub struct Reporter {
    format: OutputFormat,
    color: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Reporter { format, color }
    }

    pub fn render_entries(&self, entries: &[CodePointEntry]) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(entries),
            OutputFormat::Text => Ok(entries
                .iter()
                .map(|entry| self.format_entry(entry))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    pub fn render_names(&self, infos: &[CodePointInfo]) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(infos),
            OutputFormat::Text => Ok(infos
                .iter()
                .map(|info| format!("{} {}", info.display, self.format_name(info)))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    pub fn render_classifications(&self, infos: &[CodePointInfo]) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(infos),
            OutputFormat::Text => Ok(infos
                .iter()
                .map(|info| self.format_classification(info))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_entry(&self, entry: &CodePointEntry) -> String {
        // Pad before painting; escape codes would otherwise count toward the width.
        let padded = format!("{:<24}", entry.name);
        format!(
            "{} {}",
            self.paint_name(&padded),
            format_code_point(entry.value)
        )
    }

    fn format_name(&self, info: &CodePointInfo) -> String {
        let Some(name) = info.name else {
            return "-".to_string();
        };
        let mut out = self.paint_name(name);
        if !info.aliases.is_empty() {
            out.push_str(&format!(" (alias: {})", info.aliases.join(", ")));
        }
        out
    }

    fn format_classification(&self, info: &CodePointInfo) -> String {
        let flags = if info.flags.is_empty() {
            "-".to_string()
        } else {
            info.flags.join(" | ")
        };
        format!("{} {} {}", info.display, self.format_name(info), flags)
    }

    fn paint_name(&self, name: &str) -> String {
        if self.color {
            name.cyan().bold().to_string()
        } else {
            name.to_string()
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
