//! Settings schema.
//!
//! Maps to the optional `.gosdk/config.yml` file. Every field has a default,
//! so an empty file (or no file) yields [`Settings::default`].

use serde::{Deserialize, Serialize};

use crate::toolchain::{DerivedTool, ToolCandidates};

/// Settings that shape the configuration model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether an empty GOROOT is an error.
    pub root_required: bool,

    /// Whether an empty `go` tool location is an error.
    pub compiler_required: bool,

    /// Whether an empty `gofmt` location is an error.
    pub formatter_required: bool,

    /// Whether an empty `godoc` location is an error.
    pub documentor_required: bool,

    /// Environment variable backing the search-path default.
    pub search_path_var: String,

    /// Candidate filenames probed under `<GOROOT>/bin`.
    pub candidates: ToolCandidates,
}

impl Settings {
    /// Whether an empty value for `tool` is an error.
    pub fn tool_required(&self, tool: DerivedTool) -> bool {
        match tool {
            DerivedTool::Compiler => self.compiler_required,
            DerivedTool::Formatter => self.formatter_required,
            DerivedTool::Documentor => self.documentor_required,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_required: true,
            compiler_required: true,
            formatter_required: false,
            documentor_required: false,
            search_path_var: "GOPATH".to_string(),
            candidates: ToolCandidates::default(),
        }
    }
}
