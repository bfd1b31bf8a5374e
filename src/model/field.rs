//! Field identifiers.

use std::str::FromStr;

use serde::Serialize;

use crate::error::SdkError;
use crate::toolchain::DerivedTool;

/// A stable identifier for every field the model owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum FieldId {
    Root,
    Os,
    Arch,
    Compiler,
    Formatter,
    Documentor,
    SearchPath,
}

impl FieldId {
    /// Every field, in display order.
    pub const ALL: [FieldId; 7] = [
        FieldId::Root,
        FieldId::Os,
        FieldId::Arch,
        FieldId::Compiler,
        FieldId::Formatter,
        FieldId::Documentor,
        FieldId::SearchPath,
    ];

    /// Key used in the persisted field map.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Root => "GO_ROOT",
            FieldId::Os => "GO_OS",
            FieldId::Arch => "GO_ARCH",
            FieldId::Compiler => "COMPILER_PATH",
            FieldId::Formatter => "FORMATTER_PATH",
            FieldId::Documentor => "DOCUMENTOR_PATH",
            FieldId::SearchPath => "GO_PATH",
        }
    }

    /// Label shown next to the field and used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Root => "GOROOT",
            FieldId::Os => "GOOS",
            FieldId::Arch => "GOARCH",
            FieldId::Compiler => "go tool",
            FieldId::Formatter => "gofmt",
            FieldId::Documentor => "godoc",
            FieldId::SearchPath => "GOPATH",
        }
    }

    /// The derived tool this field holds, if any.
    pub fn tool(self) -> Option<DerivedTool> {
        match self {
            FieldId::Compiler => Some(DerivedTool::Compiler),
            FieldId::Formatter => Some(DerivedTool::Formatter),
            FieldId::Documentor => Some(DerivedTool::Documentor),
            _ => None,
        }
    }
}

impl From<DerivedTool> for FieldId {
    fn from(tool: DerivedTool) -> Self {
        match tool {
            DerivedTool::Compiler => FieldId::Compiler,
            DerivedTool::Formatter => FieldId::Formatter,
            DerivedTool::Documentor => FieldId::Documentor,
        }
    }
}

impl From<FieldId> for &'static str {
    fn from(field: FieldId) -> Self {
        field.key()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldId {
    type Err = SdkError;

    /// Parse a persisted field map key.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| SdkError::UnknownField {
                key: key.to_string(),
            })
    }
}
