//! Path existence checks.
//!
//! Every location the model inspects goes through [`exists`]. It is a total
//! function: blank input, missing paths and unreadable metadata all yield
//! `false` rather than an error.

use std::path::Path;

/// The kind of filesystem entry a location is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// A regular file (symlinks are followed).
    File,
    /// A directory (symlinks are followed).
    Directory,
    /// Anything that exists.
    Any,
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Any => write!(f, "file or directory"),
        }
    }
}

/// Check whether `path` exists and is of the expected `kind`.
///
/// # Example
///
/// ```
/// use gosdk::location::{exists, LocationKind};
///
/// assert!(!exists("", LocationKind::Any));
/// assert!(!exists("   ", LocationKind::Directory));
/// assert!(exists(env!("CARGO_MANIFEST_DIR"), LocationKind::Directory));
/// ```
pub fn exists(path: impl AsRef<Path>, kind: LocationKind) -> bool {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(meta) => match kind {
            LocationKind::File => meta.is_file(),
            LocationKind::Directory => meta.is_dir(),
            LocationKind::Any => true,
        },
        Err(_) => false,
    }
}

/// Return the first `dir/<name>` that exists as a regular file.
///
/// Candidates are probed in order; the first hit wins.
pub fn first_existing_file<'a, I>(dir: &Path, names: I) -> Option<std::path::PathBuf>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| dir.join(name))
        .find(|candidate| exists(candidate, LocationKind::File))
}
