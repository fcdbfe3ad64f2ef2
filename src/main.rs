use std::process::ExitCode;

use clap::Parser;
use sudoers_safe_edit::{Commands, GlobalArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Safe editor for sudoers Defaults and aliases, gated by a syntax check.
#[derive(Debug, Parser)]
#[command(name = "sudoers-safe-edit", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.global.verbose);
    Ok(sudoers_safe_edit::run(&cli.global, cli.command)?)
}

/// Logs go to stderr; stdout is reserved for JSON output.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
