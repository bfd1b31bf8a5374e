//! Environment variable defaults.
//!
//! The model never reads the process environment directly. Production code
//! captures an [`EnvSnapshot`] once at construction time; tests build one
//! from a plain map.

use std::collections::HashMap;

/// Look up `name` in `env`, returning an empty string when it is absent.
///
/// Lookups are case-sensitive on every platform.
pub fn resolve(env: &HashMap<String, String>, name: &str) -> String {
    env.get(name).cloned().unwrap_or_default()
}

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// An empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve `name`, returning an empty string when it is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use gosdk::environment::EnvSnapshot;
    ///
    /// let env = EnvSnapshot::from_iter([("GOPATH", "/home/me/go")]);
    /// assert_eq!(env.resolve("GOPATH"), "/home/me/go");
    /// assert_eq!(env.resolve("gopath"), "");
    /// ```
    pub fn resolve(&self, name: &str) -> String {
        resolve(&self.vars, name)
    }

    /// Whether `name` is set (possibly to an empty value).
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

impl From<HashMap<String, String>> for EnvSnapshot {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
