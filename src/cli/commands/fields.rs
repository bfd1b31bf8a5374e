//! Shared plumbing between commands: loading saved field maps, applying
//! field flags and turning the final status into a command result.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::cli::args::{FieldArgs, ReportArgs};
use crate::cli::output::{write_report, Report};
use crate::error::{Result, SdkError};
use crate::model::{FieldId, SdkConfigModel};
use crate::validation::Level;

use super::dispatcher::CommandResult;

/// Read a saved field map. JSON is accepted as well, being valid YAML.
pub fn load_field_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_yaml::from_str(&content).map_err(|e| SdkError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load `args.prefs` into `model`, if given.
pub fn apply_prefs(model: &mut SdkConfigModel, args: &ReportArgs) -> Result<()> {
    if let Some(path) = &args.prefs {
        let map = load_field_map(path)?;
        debug!(path = %path.display(), "applying saved field map");
        model.load_field_map(&map)?;
    }
    Ok(())
}

/// Apply explicit field flags.
///
/// With `notify` set each value goes through the model's change handling;
/// otherwise it is only stored.
pub fn apply_fields(model: &mut SdkConfigModel, fields: &FieldArgs, notify: bool) -> Result<()> {
    let explicit = [
        (FieldId::Os, &fields.goos),
        (FieldId::Arch, &fields.goarch),
        (FieldId::Compiler, &fields.go_tool),
        (FieldId::Formatter, &fields.gofmt),
        (FieldId::Documentor, &fields.godoc),
        (FieldId::SearchPath, &fields.gopath),
    ];
    for (field, value) in explicit {
        if let Some(value) = value {
            set(model, field, value, notify)?;
        }
    }

    if fields.reset_gopath {
        model.reset_search_path();
    }

    // The model appends blindly, so blank entries stop here
    for entry in fields.add_gopath.iter().filter(|e| !e.trim().is_empty()) {
        model.append_search_path(entry);
    }

    Ok(())
}

/// Store `value` in `field`, notifying the model if requested.
pub fn set(model: &mut SdkConfigModel, field: FieldId, value: &str, notify: bool) -> Result<()> {
    if notify {
        model.edit(field, value)
    } else {
        model.set_field_value(field, value)
    }
}

/// Render the report and map the overall status to an exit code.
pub fn finish(
    model: &SdkConfigModel,
    args: &ReportArgs,
    out: &mut dyn Write,
) -> Result<CommandResult> {
    write_report(&Report::from_model(model), args.format, out)?;

    let blocked = match model.overall_status() {
        Level::Error => true,
        Level::Warning => args.strict,
        Level::Ok => false,
    };
    if blocked {
        Ok(CommandResult::failure(1))
    } else {
        Ok(CommandResult::success())
    }
}
