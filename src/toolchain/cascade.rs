//! Root-change cascade.
//!
//! When GOROOT changes, every dependent value is re-baselined from it:
//!
//! 1. The GOOS / GOARCH selectors are reset to unset.
//! 2. Each derived tool is probed as `<root>/bin/<candidate>`, first match
//!    wins, and the result overwrites the tool's current value, including
//!    any hand edit. No match, or an unusable root, clears the value.
//!
//! The cascade keeps no state between runs, so running it twice for the
//! same root produces the same values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::target::{GoArch, GoOs};
use super::tools::{DerivedTool, ToolCandidates};
use crate::location::first_existing_file;

/// The GOOS / GOARCH selector pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPlatform {
    pub os: Option<GoOs>,
    pub arch: Option<GoArch>,
}

impl TargetPlatform {
    /// Reset both selectors to "use default".
    pub fn reset(&mut self) {
        self.os = None;
        self.arch = None;
    }

    /// Whether both selectors are unset.
    pub fn is_default(&self) -> bool {
        self.os.is_none() && self.arch.is_none()
    }
}

/// Current values of the derived tool fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPaths {
    pub compiler: String,
    pub formatter: String,
    pub documentor: String,
}

impl ToolPaths {
    pub fn get(&self, tool: DerivedTool) -> &str {
        match tool {
            DerivedTool::Compiler => &self.compiler,
            DerivedTool::Formatter => &self.formatter,
            DerivedTool::Documentor => &self.documentor,
        }
    }

    pub fn set(&mut self, tool: DerivedTool, value: impl Into<String>) {
        let value = value.into();
        match tool {
            DerivedTool::Compiler => self.compiler = value,
            DerivedTool::Formatter => self.formatter = value,
            DerivedTool::Documentor => self.documentor = value,
        }
    }
}

/// Derives tool locations from an SDK root.
#[derive(Debug, Clone, Default)]
pub struct CascadeEngine {
    candidates: ToolCandidates,
}

impl CascadeEngine {
    pub fn new(candidates: ToolCandidates) -> Self {
        Self { candidates }
    }

    /// Resolve `tool` under `<root>/bin`, or an empty string if no candidate
    /// exists as a file.
    ///
    /// A match is made absolute against the working directory, so a relative
    /// root still yields a location that stays valid after `cd`.
    pub fn resolve_tool(&self, root: &str, tool: DerivedTool) -> String {
        if root.trim().is_empty() {
            return String::new();
        }

        let bin = Path::new(root).join("bin");
        let names = self.candidates.for_tool(tool).iter().map(String::as_str);
        first_existing_file(&bin, names)
            .map(|path| {
                std::path::absolute(&path)
                    .unwrap_or(path)
                    .to_string_lossy()
                    .into_owned()
            })
            .unwrap_or_default()
    }

    /// Run the cascade for `root`.
    ///
    /// `root_usable` is whether the root currently validates as ok or
    /// warning. An unusable root is not probed; every tool is cleared.
    /// Returns the tools whose values were written, which is always all
    /// of them.
    pub fn run(
        &self,
        root: &str,
        root_usable: bool,
        target: &mut TargetPlatform,
        tools: &mut ToolPaths,
    ) -> Vec<DerivedTool> {
        target.reset();

        for tool in DerivedTool::ALL {
            let resolved = if root_usable {
                self.resolve_tool(root, tool)
            } else {
                String::new()
            };
            debug!(%tool, root, resolved = %resolved, "derived tool location");
            tools.set(tool, resolved);
        }

        DerivedTool::ALL.to_vec()
    }
}
