//! Tools derived from the SDK root.

use serde::{Deserialize, Serialize};

/// A tool whose location is derived from `<GOROOT>/bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivedTool {
    /// The `go` tool.
    Compiler,
    /// `gofmt`.
    Formatter,
    /// `godoc`.
    Documentor,
}

impl DerivedTool {
    /// Every derived tool, in cascade order.
    pub const ALL: [DerivedTool; 3] = [
        DerivedTool::Compiler,
        DerivedTool::Formatter,
        DerivedTool::Documentor,
    ];

    /// Base executable name, without any platform suffix.
    pub fn base_name(self) -> &'static str {
        match self {
            DerivedTool::Compiler => "go",
            DerivedTool::Formatter => "gofmt",
            DerivedTool::Documentor => "godoc",
        }
    }

    /// Default candidate filenames for the host platform, in priority order.
    pub fn default_candidates(self) -> Vec<String> {
        let base = self.base_name();
        if cfg!(windows) {
            match self {
                // Some Windows installs ship an extensionless launcher too
                DerivedTool::Compiler => vec![format!("{}.exe", base), base.to_string()],
                _ => vec![format!("{}.exe", base)],
            }
        } else {
            vec![base.to_string()]
        }
    }
}

impl std::fmt::Display for DerivedTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_name())
    }
}

/// Ordered candidate filenames for every derived tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCandidates {
    pub compiler: Vec<String>,
    pub formatter: Vec<String>,
    pub documentor: Vec<String>,
}

impl ToolCandidates {
    /// Candidate filenames for `tool`, in priority order.
    pub fn for_tool(&self, tool: DerivedTool) -> &[String] {
        match tool {
            DerivedTool::Compiler => &self.compiler,
            DerivedTool::Formatter => &self.formatter,
            DerivedTool::Documentor => &self.documentor,
        }
    }

    /// Replace the candidates for `tool`.
    pub fn set(&mut self, tool: DerivedTool, names: Vec<String>) {
        match tool {
            DerivedTool::Compiler => self.compiler = names,
            DerivedTool::Formatter => self.formatter = names,
            DerivedTool::Documentor => self.documentor = names,
        }
    }
}

impl Default for ToolCandidates {
    fn default() -> Self {
        Self {
            compiler: DerivedTool::Compiler.default_candidates(),
            formatter: DerivedTool::Formatter.default_candidates(),
            documentor: DerivedTool::Documentor.default_candidates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_host_platform() {
        let candidates = ToolCandidates::default();
        if cfg!(windows) {
            assert_eq!(candidates.compiler, vec!["go.exe", "go"]);
            assert_eq!(candidates.formatter, vec!["gofmt.exe"]);
        } else {
            assert_eq!(candidates.compiler, vec!["go"]);
            assert_eq!(candidates.formatter, vec!["gofmt"]);
            assert_eq!(candidates.documentor, vec!["godoc"]);
        }
    }

    #[test]
    fn set_replaces_one_tool() {
        let mut candidates = ToolCandidates::default();
        candidates.set(
            DerivedTool::Compiler,
            vec!["compilerA".to_string(), "compilerB".to_string()],
        );
        assert_eq!(
            candidates.for_tool(DerivedTool::Compiler),
            ["compilerA", "compilerB"]
        );
        assert_eq!(
            candidates.for_tool(DerivedTool::Formatter),
            DerivedTool::Formatter.default_candidates().as_slice()
        );
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let candidates: ToolCandidates = serde_yaml::from_str("compiler: [go1, go]").unwrap();
        assert_eq!(candidates.compiler, vec!["go1", "go"]);
        assert_eq!(candidates.documentor, DerivedTool::Documentor.default_candidates());
    }

    #[test]
    fn display_uses_base_name() {
        assert_eq!(DerivedTool::Documentor.to_string(), "godoc");
    }
}
