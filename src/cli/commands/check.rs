//! Check command implementation.
//!
//! `gosdk check` validates the given values exactly as they are. GOROOT is
//! stored without running the cascade, so saved or hand-picked tool
//! locations are checked rather than re-derived.

use std::io::Write;

use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::environment::EnvSnapshot;
use crate::error::Result;
use crate::model::{FieldId, SdkConfigModel};

use super::dispatcher::{Command, CommandResult};
use super::fields::{apply_fields, apply_prefs, finish};

/// The check command implementation.
pub struct CheckCommand {
    env: EnvSnapshot,
    settings: Settings,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(env: EnvSnapshot, settings: Settings, args: CheckArgs) -> Self {
        Self {
            env,
            settings,
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut model = SdkConfigModel::new(self.env.clone(), &self.settings);
        apply_prefs(&mut model, &self.args.report)?;

        if let Some(root) = &self.args.goroot {
            model.set_field_value(FieldId::Root, root)?;
        }
        apply_fields(&mut model, &self.args.fields, false)?;
        model.revalidate_all();

        finish(&model, &self.args.report, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{FieldArgs, ReportArgs};
    use crate::cli::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn json_args(goroot: Option<String>, fields: FieldArgs) -> CheckArgs {
        CheckArgs {
            goroot,
            fields,
            report: ReportArgs {
                format: OutputFormat::Json,
                ..Default::default()
            },
        }
    }

    fn run(args: CheckArgs, env: EnvSnapshot) -> (CommandResult, serde_json::Value) {
        let cmd = CheckCommand::new(env, Settings::default(), args);
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        let report = serde_json::from_slice(&out).unwrap();
        (result, report)
    }

    fn make_sdk() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("bin").join("go"), "").unwrap();
        temp
    }

    #[test]
    fn missing_root_fails() {
        let (result, report) = run(json_args(None, FieldArgs::default()), EnvSnapshot::empty());
        assert_eq!(result.exit_code, 1);
        assert_eq!(report["overall"], "error");
    }

    #[test]
    fn root_alone_does_not_derive_tools() {
        let sdk = make_sdk();
        let root = sdk.path().to_string_lossy().into_owned();
        let args = json_args(Some(root), FieldArgs::default());
        let (result, report) = run(args, EnvSnapshot::empty());

        // go tool stays empty and is required
        assert_eq!(report["fields"]["COMPILER_PATH"], "");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn complete_values_pass() {
        let sdk = make_sdk();
        let root = sdk.path().to_string_lossy().into_owned();
        let go = sdk.path().join("bin").join("go").to_string_lossy().into_owned();
        let fields = FieldArgs {
            go_tool: Some(go),
            goos: Some("linux".to_string()),
            ..Default::default()
        };
        let (result, report) = run(json_args(Some(root), fields), EnvSnapshot::empty());

        assert!(result.success);
        assert_eq!(report["overall"], "ok");
        assert_eq!(report["fields"]["GO_OS"], "linux");
    }

    #[test]
    fn gopath_defaults_from_environment() {
        let env = EnvSnapshot::from_iter([("GOPATH", "/home/me/go")]);
        let (_, report) = run(json_args(None, FieldArgs::default()), env);
        assert_eq!(report["fields"]["GO_PATH"], "/home/me/go");
    }

    #[test]
    fn prefs_are_loaded_before_flags() {
        let temp = TempDir::new().unwrap();
        let prefs = temp.path().join("prefs.yml");
        fs::write(&prefs, "GO_ROOT: /saved/root\nGO_ARCH: arm\n").unwrap();

        let mut args = json_args(
            None,
            FieldArgs {
                goarch: Some("amd64".to_string()),
                ..Default::default()
            },
        );
        args.report.prefs = Some(prefs);
        let (_, report) = run(args, EnvSnapshot::empty());

        assert_eq!(report["fields"]["GO_ROOT"], "/saved/root");
        assert_eq!(report["fields"]["GO_ARCH"], "amd64");
    }
}
