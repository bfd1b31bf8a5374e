//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are the
//! presentation layer: they build a model, forward field values to it and
//! render what it reports.

pub mod check;
pub mod derive;
pub mod dispatcher;
pub mod fields;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
