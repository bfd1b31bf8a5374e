//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::output::OutputFormat;

/// gosdk - Validate a Go SDK installation and derive its tool locations.
#[derive(Debug, Parser)]
#[command(name = "gosdk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides default .gosdk/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate field values as given, without deriving anything
    Check(CheckArgs),

    /// Set GOROOT, derive tool locations from it, and validate the result
    Derive(DeriveArgs),
}

/// Explicit field values applied after any loaded preferences.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FieldArgs {
    /// Target operating system ("" for default)
    #[arg(long, value_name = "GOOS")]
    pub goos: Option<String>,

    /// Target architecture ("" for default)
    #[arg(long, value_name = "GOARCH")]
    pub goarch: Option<String>,

    /// Location of the go tool
    #[arg(long, value_name = "PATH")]
    pub go_tool: Option<String>,

    /// Location of gofmt
    #[arg(long, value_name = "PATH")]
    pub gofmt: Option<String>,

    /// Location of godoc
    #[arg(long, value_name = "PATH")]
    pub godoc: Option<String>,

    /// Use the GOPATH environment variable instead of any saved value
    #[arg(long, conflicts_with = "gopath")]
    pub reset_gopath: bool,

    /// Explicit GOPATH list, replacing the environment default
    #[arg(long, value_name = "LIST")]
    pub gopath: Option<String>,

    /// Append a directory to GOPATH (repeatable)
    #[arg(long, value_name = "DIR")]
    pub add_gopath: Vec<String>,
}

/// Output and gating options shared by all commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Saved field map to start from (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Go SDK installation directory
    #[arg(long, value_name = "DIR")]
    pub goroot: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the `derive` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeriveArgs {
    /// Go SDK installation directory
    #[arg(value_name = "GOROOT")]
    pub goroot: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}
