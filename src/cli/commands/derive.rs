//! Derive command implementation.
//!
//! `gosdk derive <GOROOT>` applies GOROOT as a user edit, so the cascade
//! re-derives the tool locations and resets the target selectors. Explicit
//! flags are applied afterwards and win over the derived values.

use std::io::Write;

use tracing::debug;

use crate::cli::args::DeriveArgs;
use crate::config::Settings;
use crate::environment::EnvSnapshot;
use crate::error::Result;
use crate::model::{FieldId, SdkConfigModel};

use super::dispatcher::{Command, CommandResult};
use super::fields::{apply_fields, apply_prefs, finish};

/// The derive command implementation.
pub struct DeriveCommand {
    env: EnvSnapshot,
    settings: Settings,
    args: DeriveArgs,
}

impl DeriveCommand {
    /// Create a new derive command.
    pub fn new(env: EnvSnapshot, settings: Settings, args: DeriveArgs) -> Self {
        Self {
            env,
            settings,
            args,
        }
    }
}

impl Command for DeriveCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut model = SdkConfigModel::new(self.env.clone(), &self.settings);
        apply_prefs(&mut model, &self.args.report)?;

        model.edit(FieldId::Root, &self.args.goroot)?;
        debug!(tools = ?model.tools(), "derived tool locations");

        apply_fields(&mut model, &self.args.fields, true)?;

        finish(&model, &self.args.report, out)
    }
}
