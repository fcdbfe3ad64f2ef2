mod inspect;
mod save;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::commit::CommitError;
use crate::config::{Config, ConfigError};
use crate::edit::{EditError, EditState};
use crate::sudoers::LoadError;
use crate::validation::{RowError, TableValidation, ValidationResult};

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the KDL config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sudoers file to operate on (overrides the config's `sudoers`)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Log external commands and commit steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the parsed Defaults, aliases and passthrough lines as JSON
    Show,
    /// Validate an edit state read as JSON from stdin
    Validate,
    /// Validate and commit an edit state read as JSON from stdin
    Commit,
    /// Edit Defaults from the command line, then commit
    Edit(EditArgs),
    /// List the sudo plugins reported by the plugin command
    Plugins,
}

/// Edits applied by the `edit` subcommand, in the order listed here.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Set a Defaults value: `KEY=VALUE`, or `KEY` for a bare flag
    #[arg(long = "set", value_name = "KEY[=VALUE]")]
    pub set: Vec<String>,

    /// Remove a Defaults setting
    #[arg(long = "unset", value_name = "KEY")]
    pub unset: Vec<String>,

    /// Append a directory to secure_path (ignored if already present)
    #[arg(long = "path-add", value_name = "DIR")]
    pub path_add: Vec<String>,

    /// Remove a directory from secure_path
    #[arg(long = "path-remove", value_name = "DIR")]
    pub path_remove: Vec<String>,

    /// Print the merged file instead of committing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Top-level failures reported by the binary.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AppError {
    #[error(transparent)]
    #[diagnostic(
        code(sudoers_safe_edit::config),
        help("check the file passed with --config")
    )]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(sudoers_safe_edit::load))]
    Load(#[from] LoadError),

    #[error("failed to read stdin: {0}")]
    #[diagnostic(code(sudoers_safe_edit::stdin))]
    Stdin(#[from] std::io::Error),

    #[error("invalid edit state JSON: {0}")]
    #[diagnostic(
        code(sudoers_safe_edit::input),
        help("expected an object with `defaults` (key, value) and `aliases` (identity, definition) row arrays")
    )]
    Input(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(sudoers_safe_edit::edit))]
    Edit(#[from] EditError),

    #[error(transparent)]
    #[diagnostic(code(sudoers_safe_edit::commit))]
    Commit(CommitError),
}

/// Validation results as printed by the CLI.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    ok: bool,
    defaults: &'a [ValidationResult],
    aliases: &'a [ValidationResult],
    errors: Vec<RowError>,
}

impl<'a> From<&'a TableValidation> for ValidationReport<'a> {
    fn from(v: &'a TableValidation) -> Self {
        ValidationReport {
            ok: v.ok,
            defaults: &v.defaults,
            aliases: &v.aliases,
            errors: v.errors(),
        }
    }
}

/// Dispatch a subcommand. JSON goes to stdout; logs go to stderr.
pub fn run(global: &GlobalArgs, command: Commands) -> Result<ExitCode, AppError> {
    let config = match &global.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let target = global.file.as_deref().unwrap_or(&config.sudoers);

    match command {
        Commands::Show => inspect::show(target),
        Commands::Validate => inspect::validate(),
        Commands::Plugins => inspect::plugins(&config),
        Commands::Commit => save::commit(&config, target),
        Commands::Edit(args) => save::edit(&config, target, &args),
    }
}

fn read_edit_state() -> Result<EditState, AppError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(serde_json::from_str(&input)?)
}

fn print_validation(validation: &TableValidation) -> ExitCode {
    output_json(&ValidationReport::from(validation));
    if validation.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Serialize a value to pretty JSON and print to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impls on strings, paths and enums. This is an invariant, not a
/// runtime error.
fn output_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).expect("output serialization cannot fail");
    println!("{json}");
}
