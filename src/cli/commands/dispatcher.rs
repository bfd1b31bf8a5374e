//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings, Settings};
use crate::environment::EnvSnapshot;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    env: EnvSnapshot,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root and environment.
    pub fn new(project_root: PathBuf, env: EnvSnapshot) -> Self {
        Self { project_root, env }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let settings = self.settings(cli)?;

        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(self.env.clone(), settings, args.clone());
                cmd.execute(out)
            }
            Commands::Derive(args) => {
                let cmd =
                    super::derive::DeriveCommand::new(self.env.clone(), settings, args.clone());
                cmd.execute(out)
            }
        }
    }

    fn settings(&self, cli: &Cli) -> Result<Settings> {
        let explicit = cli.config.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                self.project_root.join(p)
            }
        });
        load_settings(explicit.as_deref(), &self.project_root)
    }
}
