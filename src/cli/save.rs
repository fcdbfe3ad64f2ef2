use std::path::Path;
use std::process::ExitCode;

use tracing::warn;

use super::{output_json, print_validation, read_edit_state, AppError, EditArgs};
use crate::commit::{CommitError, Committer, SystemRunner};
use crate::config::Config;
use crate::edit::Session;
use crate::sudoers::split_default_body;

/// `commit`: replace the file's rows with those read from stdin and commit.
pub(super) fn commit(config: &Config, target: &Path) -> Result<ExitCode, AppError> {
    let mut session = Session::load(target)?;
    let state = read_edit_state()?.with_passthrough(session.document());
    *session.state_mut() = state;
    finish(config, &mut session)
}

/// `edit`: apply command-line edits to the loaded rows, then commit or print.
pub(super) fn edit(config: &Config, target: &Path, args: &EditArgs) -> Result<ExitCode, AppError> {
    let mut session = Session::load(target)?;
    let state = session.state_mut();

    for assignment in &args.set {
        let (key, value) = split_default_body(assignment);
        state.set_default(key, value);
    }
    for key in &args.unset {
        state.unset_default(key)?;
    }
    if !args.path_add.is_empty() || !args.path_remove.is_empty() {
        let mut dirs = state.secure_path();
        let mut changed = false;
        for dir in &args.path_add {
            if dirs.insert(dir) {
                changed = true;
            } else {
                warn!(dir = %dir, "already in secure_path");
            }
        }
        for dir in &args.path_remove {
            if dirs.remove(dir) {
                changed = true;
            } else {
                warn!(dir = %dir, "not in secure_path");
            }
        }
        if changed {
            state.set_secure_path(&dirs);
        }
    }

    if args.dry_run {
        let validation = session.validate();
        if !validation.ok {
            return Ok(print_validation(&validation));
        }
        print!("{}", session.state().render());
        return Ok(ExitCode::SUCCESS);
    }
    finish(config, &mut session)
}

fn finish(config: &Config, session: &mut Session) -> Result<ExitCode, AppError> {
    let committer = Committer::new(SystemRunner, config);
    match session.commit(&committer) {
        Ok(outcome) => {
            output_json(&outcome);
            Ok(if outcome.is_written() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(CommitError::Invalid(validation)) => Ok(print_validation(&validation)),
        Err(e) => Err(AppError::Commit(e)),
    }
}
