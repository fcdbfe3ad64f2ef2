pub mod commit;
pub mod config;
pub mod domain;
pub mod edit;
pub mod plugins;
pub mod sudoers;
pub mod validation;

pub(crate) mod cli;

pub use cli::{AppError, Commands, EditArgs, GlobalArgs};

/// Run one CLI subcommand.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Front ends
/// other than the CLI should use [`edit::Session`] and [`commit::Committer`]
/// directly.
pub fn run(
    global: &GlobalArgs,
    command: Commands,
) -> Result<std::process::ExitCode, AppError> {
    cli::run(global, command)
}
