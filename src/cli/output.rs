//! Report rendering.
//!
//! Formats the model's field values and validation states as human-readable
//! text, JSON or YAML.

use std::collections::BTreeMap;
use std::io::Write;

use console::style;
use serde::Serialize;

use crate::error::{Result, SdkError};
use crate::model::{FieldId, SdkConfigModel};
use crate::validation::{FieldValidationState, Level};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Snapshot of the model for display.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Field values keyed by persistence key.
    pub fields: BTreeMap<String, String>,
    /// Per-field validation states, in registration order.
    pub validation: Vec<&'a FieldValidationState<FieldId>>,
    /// Worst level across all fields.
    pub overall: Level,
    /// Whether apply/save is permitted.
    pub can_apply: bool,
}

impl<'a> Report<'a> {
    pub fn from_model(model: &'a SdkConfigModel) -> Self {
        Self {
            fields: model.to_field_map(),
            validation: model.field_states(),
            overall: model.overall_status(),
            can_apply: model.can_apply(),
        }
    }
}

/// Write `report` in `format`.
pub fn write_report<W: Write + ?Sized>(
    report: &Report<'_>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).map_err(|e| SdkError::Other(e.into()))?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report).map_err(|e| SdkError::Other(e.into()))?;
            write!(out, "{}", yaml)?;
        }
        OutputFormat::Human => write_human(report, out)?,
    }
    Ok(())
}

fn level_tag(level: Level) -> String {
    match level {
        Level::Ok => style("ok").green().to_string(),
        Level::Warning => style("warning").yellow().bold().to_string(),
        Level::Error => style("error").red().bold().to_string(),
    }
}

fn write_human<W: Write + ?Sized>(report: &Report<'_>, out: &mut W) -> std::io::Result<()> {
    for field in FieldId::ALL {
        let value = report
            .fields
            .get(field.key())
            .map(String::as_str)
            .unwrap_or_default();
        let shown = if value.is_empty() {
            style("<default>").dim().to_string()
        } else {
            value.to_string()
        };
        writeln!(out, "{:<8} {}", style(field.label()).bold(), shown)?;
    }

    let issues: Vec<_> = report
        .validation
        .iter()
        .filter(|s| s.level() != Level::Ok)
        .collect();
    if !issues.is_empty() {
        writeln!(out)?;
        for state in issues {
            writeln!(out, "{}: {}", level_tag(state.level()), state.message())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Overall: {}", level_tag(report.overall))?;
    Ok(())
}
