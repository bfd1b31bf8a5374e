//! Validation levels and results.
//!
//! - [`Level`] - Severity of a field's current value (Ok, Warning, Error)
//! - [`ValidationResult`] - A level plus a human-readable message

use serde::Serialize;

/// Severity of a field's current value.
///
/// Ordered so that the worst level compares greatest, which lets the
/// aggregate status be computed with `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No issue.
    #[default]
    Ok,
    /// Usable, but unconventional. Does not block applying.
    Warning,
    /// Missing or invalid. Blocks applying.
    Error,
}

impl Level {
    /// Whether this level allows downstream apply/save actions.
    pub fn permits_apply(self) -> bool {
        self != Level::Error
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Ok => write!(f, "ok"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// Outcome of validating one raw field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Severity of the outcome.
    pub level: Level,
    /// Human-readable message. Empty when the level is [`Level::Ok`].
    pub message: String,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self {
            level: Level::Ok,
            message: String::new(),
        }
    }

    /// A non-blocking advisory result.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    /// A blocking result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Whether the value is usable (ok or warning).
    pub fn is_usable(&self) -> bool {
        self.level.permits_apply()
    }
}
