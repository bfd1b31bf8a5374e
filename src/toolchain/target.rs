//! Target platform selectors (GOOS / GOARCH).
//!
//! Both selectors are optional: `None` means "use the toolchain default"
//! and is persisted as an empty string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoOs {
    Android,
    Darwin,
    Dragonfly,
    Freebsd,
    Linux,
    Netbsd,
    Openbsd,
    Plan9,
    Solaris,
    Windows,
}

impl GoOs {
    /// Every selectable value, in display order.
    pub const ALL: [GoOs; 10] = [
        GoOs::Android,
        GoOs::Darwin,
        GoOs::Dragonfly,
        GoOs::Freebsd,
        GoOs::Linux,
        GoOs::Netbsd,
        GoOs::Openbsd,
        GoOs::Plan9,
        GoOs::Solaris,
        GoOs::Windows,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GoOs::Android => "android",
            GoOs::Darwin => "darwin",
            GoOs::Dragonfly => "dragonfly",
            GoOs::Freebsd => "freebsd",
            GoOs::Linux => "linux",
            GoOs::Netbsd => "netbsd",
            GoOs::Openbsd => "openbsd",
            GoOs::Plan9 => "plan9",
            GoOs::Solaris => "solaris",
            GoOs::Windows => "windows",
        }
    }
}

impl std::fmt::Display for GoOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoOs {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoOs::ALL
            .into_iter()
            .find(|os| os.as_str() == s)
            .ok_or_else(|| invalid("GOOS", s, GoOs::ALL.iter().map(|os| os.as_str())))
    }
}

/// Target architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoArch {
    #[serde(rename = "amd64")]
    Amd64,
    #[serde(rename = "386")]
    I386,
    #[serde(rename = "arm")]
    Arm,
}

impl GoArch {
    /// Every selectable value, in display order.
    pub const ALL: [GoArch; 3] = [GoArch::Amd64, GoArch::I386, GoArch::Arm];

    pub fn as_str(self) -> &'static str {
        match self {
            GoArch::Amd64 => "amd64",
            GoArch::I386 => "386",
            GoArch::Arm => "arm",
        }
    }
}

impl std::fmt::Display for GoArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoArch {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoArch::ALL
            .into_iter()
            .find(|arch| arch.as_str() == s)
            .ok_or_else(|| invalid("GOARCH", s, GoArch::ALL.iter().map(|a| a.as_str())))
    }
}

fn invalid<'a>(field: &str, value: &str, expected: impl Iterator<Item = &'a str>) -> SdkError {
    SdkError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.collect::<Vec<_>>().join(", "),
    }
}

/// Parse a persisted selector value, where the empty string means unset.
pub fn parse_selector<T: FromStr<Err = SdkError>>(value: &str) -> Result<Option<T>, SdkError> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Format a selector for persistence, where unset becomes the empty string.
pub fn format_selector<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goos_round_trips_through_strings() {
        for os in GoOs::ALL {
            assert_eq!(os.as_str().parse::<GoOs>().unwrap(), os);
        }
    }

    #[test]
    fn goarch_uses_go_names() {
        assert_eq!(GoArch::I386.to_string(), "386");
        assert_eq!("386".parse::<GoArch>().unwrap(), GoArch::I386);
        assert_eq!("amd64".parse::<GoArch>().unwrap(), GoArch::Amd64);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = "sparc".parse::<GoArch>().unwrap_err();
        assert!(err.to_string().contains("sparc"));
        assert!(err.to_string().contains("amd64, 386, arm"));

        assert!("Linux".parse::<GoOs>().is_err());
    }

    #[test]
    fn empty_selector_is_unset() {
        assert_eq!(parse_selector::<GoOs>("").unwrap(), None);
        assert_eq!(parse_selector::<GoOs>("linux").unwrap(), Some(GoOs::Linux));
        assert!(parse_selector::<GoArch>("mips").is_err());
    }

    #[test]
    fn unset_selector_formats_empty() {
        assert_eq!(format_selector::<GoArch>(None), "");
        assert_eq!(format_selector(Some(GoArch::Arm)), "arm");
    }

    #[test]
    fn serde_names_match_display() {
        assert_eq!(serde_json::to_string(&GoArch::I386).unwrap(), "\"386\"");
        assert_eq!(serde_json::to_string(&GoOs::Plan9).unwrap(), "\"plan9\"");
    }
}
