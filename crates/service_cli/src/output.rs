//! Output rendering for command results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::Result;

/// Output format of command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn two-column table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Renders `value` as JSON or `rows` as a table.
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    rows: &[(String, String)],
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(rows)),
    }
}

/// Two-column box table.
pub fn render_table(rows: &[(String, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(key_width + 2),
            "─".repeat(value_width + 2)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(rule("┌", "┬", "┐"));
    for (key, value) in rows {
        lines.push(format!("│ {key:<key_width$} │ {value:>value_width$} │"));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Fixed six-decimal number formatting used in tables.
pub fn number(value: f64) -> String {
    format!("{value:.6}")
}
