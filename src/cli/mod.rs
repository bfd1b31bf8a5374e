//! Command-line interface for gosdk.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`output`] - Report rendering (human, JSON, YAML)

pub mod args;
pub mod commands;
pub mod output;

pub use args::{CheckArgs, Cli, Commands, DeriveArgs, FieldArgs, ReportArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use output::{write_report, OutputFormat, Report};
