use crate::{compare::Comparison, Result};
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    comparisons: &'a [Comparison],
}

/// Renders comparisons for stdout. `precision` only applies to text output.
pub fn render(comparisons: &[Comparison], format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(comparisons
            .iter()
            .map(|c| format!("{} vs {} {:.*}", c.left, c.right, precision, c.score))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&Report { comparisons })
                .context("Failed to serialize comparisons to JSON")?;
            Ok(json)
        }
    }
}
