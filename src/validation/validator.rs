//! Field validators.
//!
//! A [`FieldValidator`] turns a raw field value into a [`ValidationResult`].
//! Validators are stateless: the same input always yields the same result,
//! so they are safe to re-run on every edit.

use std::path::Path;

use super::level::ValidationResult;
use crate::location::{exists, first_existing_file, LocationKind};

/// Validates the raw string value of a single field.
pub trait FieldValidator {
    /// Validate `value`. `required` decides whether an empty value is an error.
    fn validate(&self, value: &str, required: bool) -> ValidationResult;
}

impl<F> FieldValidator for F
where
    F: Fn(&str, bool) -> ValidationResult,
{
    fn validate(&self, value: &str, required: bool) -> ValidationResult {
        self(value, required)
    }
}

fn empty_result(label: &str, required: bool) -> ValidationResult {
    if required {
        ValidationResult::error(format!("{}: path is empty", label))
    } else {
        ValidationResult::ok()
    }
}

/// Validates a Go SDK installation directory.
///
/// A value that is not an existing directory is an error. An existing
/// directory without the usual SDK layout only produces a warning, so
/// non-standard installs can still be used.
#[derive(Debug, Clone)]
pub struct SdkLocationValidator {
    label: String,
    compiler_names: Vec<String>,
}

impl SdkLocationValidator {
    /// Create a validator that looks for any of `compiler_names` under `bin/`.
    pub fn new(label: impl Into<String>, compiler_names: Vec<String>) -> Self {
        Self {
            label: label.into(),
            compiler_names,
        }
    }

    fn check_layout(&self, root: &Path) -> Option<String> {
        let bin = root.join("bin");
        if !exists(&bin, LocationKind::Directory) {
            return Some(format!("{}: no bin/ directory found", self.label));
        }

        let names = self.compiler_names.iter().map(String::as_str);
        if first_existing_file(&bin, names).is_none() {
            return Some(format!(
                "{}: no Go compiler found in bin/ (expected one of: {})",
                self.label,
                self.compiler_names.join(", ")
            ));
        }

        if !exists(root.join("src"), LocationKind::Directory) {
            return Some(format!("{}: no src/ directory found", self.label));
        }

        None
    }
}

impl FieldValidator for SdkLocationValidator {
    fn validate(&self, value: &str, required: bool) -> ValidationResult {
        if value.trim().is_empty() {
            return empty_result(&self.label, required);
        }

        let root = Path::new(value);
        if !exists(root, LocationKind::Directory) {
            return ValidationResult::error(format!(
                "{}: '{}' is not a valid directory",
                self.label, value
            ));
        }

        match self.check_layout(root) {
            Some(message) => ValidationResult::warning(message),
            None => ValidationResult::ok(),
        }
    }
}

/// Validates a location of a given kind, such as a tool executable.
#[derive(Debug, Clone)]
pub struct LocationValidator {
    label: String,
    kind: LocationKind,
}

impl LocationValidator {
    /// Create a validator for a field labelled `label`.
    pub fn new(label: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    /// A validator that only accepts regular files.
    pub fn file(label: impl Into<String>) -> Self {
        Self::new(label, LocationKind::File)
    }
}

impl FieldValidator for LocationValidator {
    fn validate(&self, value: &str, required: bool) -> ValidationResult {
        if value.trim().is_empty() {
            return empty_result(&self.label, required);
        }

        if exists(value, self.kind) {
            ValidationResult::ok()
        } else {
            ValidationResult::error(format!(
                "{}: '{}' is not an existing {}",
                self.label, value, self.kind
            ))
        }
    }
}
