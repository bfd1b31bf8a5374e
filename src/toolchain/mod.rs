//! Go toolchain layout: target selectors, derived tools and the root cascade.

pub mod cascade;
pub mod target;
pub mod tools;

pub use cascade::{CascadeEngine, TargetPlatform, ToolPaths};
pub use target::{format_selector, parse_selector, GoArch, GoOs};
pub use tools::{DerivedTool, ToolCandidates};
