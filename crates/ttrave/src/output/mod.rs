//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a value for output, using `pretty` for human-readable output.
pub fn format_output<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: impl FnOnce(&T) -> String,
) -> String {
    match format {
        OutputFormat::Json => format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}
