//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::Settings;
use crate::error::{Result, SdkError};

/// Directory holding project-level gosdk files.
pub const CONFIG_DIR: &str = ".gosdk";

/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Find the settings file for `project_root`, if one exists.
pub fn find_settings_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse settings from YAML text. `path` is only used for error messages.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| SdkError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from an explicit file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `ParseError` if it is not
/// valid settings YAML.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let settings = parse_settings(&content, path)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load settings from `explicit` if given, else from the discovered project
/// file, else the defaults.
pub fn load_settings(explicit: Option<&Path>, project_root: &Path) -> Result<Settings> {
    match explicit
        .map(Path::to_path_buf)
        .or_else(|| find_settings_file(project_root))
    {
        Some(path) => load_settings_file(&path),
        None => {
            debug!("no settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}
