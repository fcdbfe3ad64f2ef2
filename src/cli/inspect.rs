use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use super::{output_json, print_validation, read_edit_state, AppError};
use crate::commit::SystemRunner;
use crate::config::Config;
use crate::edit::Session;
use crate::plugins::list_plugins;
use crate::sudoers::lookup;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    path: String,
    defaults: Vec<DefaultView<'a>>,
    aliases: Vec<AliasView<'a>>,
    passthrough: &'a [String],
}

#[derive(Debug, Serialize)]
struct DefaultView<'a> {
    key: &'a str,
    value: &'a str,
    kind: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct AliasView<'a> {
    identity: &'a str,
    definition: &'a str,
}

/// `show`: load the file and print its editable rows.
pub(super) fn show(target: &Path) -> Result<ExitCode, AppError> {
    let session = Session::load(target)?;
    let state = session.state();

    let defaults = state
        .defaults
        .iter()
        .map(|row| {
            let meta = lookup(row.identity.trim());
            DefaultView {
                key: &row.identity,
                value: &row.value,
                kind: meta.kind.name(),
                description: meta.description,
            }
        })
        .collect();
    let aliases = state
        .aliases
        .iter()
        .map(|row| AliasView {
            identity: &row.identity,
            definition: &row.value,
        })
        .collect();

    output_json(&ShowOutput {
        path: session.path().display().to_string(),
        defaults,
        aliases,
        passthrough: state.passthrough(),
    });
    Ok(ExitCode::SUCCESS)
}

/// `validate`: check rows from stdin; exit 1 when any row is invalid.
pub(super) fn validate() -> Result<ExitCode, AppError> {
    let state = read_edit_state()?;
    Ok(print_validation(&state.validate()))
}

/// `plugins`: print the name/path pairs scraped from the plugin command.
pub(super) fn plugins(config: &Config) -> Result<ExitCode, AppError> {
    output_json(&list_plugins(&SystemRunner, &config.plugins));
    Ok(ExitCode::SUCCESS)
}
