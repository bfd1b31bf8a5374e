//! gosdk CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use gosdk::cli::{Cli, CommandDispatcher};
use gosdk::environment::EnvSnapshot;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gosdk=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gosdk=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gosdk starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // The environment is captured once; the model never reads it again
    let dispatcher = CommandDispatcher::new(project_root, EnvSnapshot::from_process());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => {
            out.flush().ok();
            ExitCode::from(result.exit_code as u8)
        }
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            ExitCode::from(2)
        }
    }
}
