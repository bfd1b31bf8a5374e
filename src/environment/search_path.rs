//! The GOPATH-style search-path field.
//!
//! The field holds a separator-joined list of directories. Until the user
//! overrides it, its value is the environment variable it is backed by.

use super::resolver::EnvSnapshot;

/// Separator between entries of a path list on the host platform.
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';

/// Separator between entries of a path list on the host platform.
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// A search-path list defaulting to an environment variable.
///
/// No deduplication, trimming or normalization is ever applied to the
/// value: duplicates and stray separators are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPathField {
    var_name: String,
    separator: char,
    explicit: Option<String>,
}

impl SearchPathField {
    /// Create a field backed by the environment variable `var_name`.
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
            separator: LIST_SEPARATOR,
            explicit: None,
        }
    }

    /// Use `separator` instead of the host separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Name of the backing environment variable.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// The list separator in use.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The environment-supplied default.
    pub fn default_value(&self, env: &EnvSnapshot) -> String {
        env.resolve(&self.var_name)
    }

    /// Whether the user has overridden the default.
    pub fn is_overridden(&self) -> bool {
        self.explicit.is_some()
    }

    /// The explicit value, or the environment default when there is none.
    ///
    /// The default is only resolved when no explicit value exists.
    pub fn value(&self, env: &EnvSnapshot) -> String {
        match &self.explicit {
            Some(value) => value.clone(),
            None => self.default_value(env),
        }
    }

    /// Override the default with `value`.
    pub fn set(&mut self, value: impl Into<String>) {
        self.explicit = Some(value.into());
    }

    /// Drop the override and fall back to the environment default.
    pub fn reset(&mut self) {
        self.explicit = None;
    }

    /// Append `entry` to the current value and make the result the override.
    ///
    /// The separator is always inserted, so appending to an empty value
    /// yields a leading separator. `entry` is not checked either: callers
    /// must not call this with a blank entry (for example after a cancelled
    /// directory picker).
    pub fn append_entry(&mut self, env: &EnvSnapshot, entry: &str) -> &str {
        let mut value = self.value(env);
        value.push(self.separator);
        value.push_str(entry);
        self.explicit.insert(value).as_str()
    }
}
