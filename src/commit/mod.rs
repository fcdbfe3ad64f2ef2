//! Commit pipeline: stage → syntax check → backup → install → reload.
//!
//! Nothing reaches the real sudoers path unless the syntax-check authority
//! accepted the staged file first. Each attempt runs to a terminal state and
//! is never retried; the committer keeps no state between attempts.

mod backup;
mod runner;

pub use backup::backup_path;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempPath;
use tracing::{error, info, warn};

use crate::config::{CommandSpec, Config};
use crate::sudoers::SourceDocument;
use crate::validation::TableValidation;

/// States of one commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitState {
    Idle,
    Staged,
    Checked,
    BackedUp,
    Written,
    Reloaded,
    CheckFailed,
    WriteFailed,
}

/// Terminal result of a commit attempt.
#[derive(Debug, Clone, Serialize)]
pub struct CommitOutcome {
    pub state: CommitState,
    /// Raw diagnostic text from the authority that stopped the attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    /// Non-fatal problems (failed backup, failed reload).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// The file as re-read after a successful write.
    #[serde(skip)]
    pub document: Option<SourceDocument>,
}

impl CommitOutcome {
    /// Whether the new content reached the real sudoers path.
    pub fn is_written(&self) -> bool {
        matches!(self.state, CommitState::Written | CommitState::Reloaded)
    }

    fn failed(state: CommitState, diagnostic: String) -> Self {
        CommitOutcome {
            state,
            diagnostic: Some(diagnostic),
            backup: None,
            warnings: Vec::new(),
            document: None,
        }
    }
}

/// Failures that stop a commit before any external authority runs.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("{} row(s) failed validation; nothing was staged", .0.errors().len())]
    Invalid(TableValidation),
    #[error("failed to stage candidate file: {0}")]
    Staging(#[source] std::io::Error),
}

/// Drives the commit pipeline through a [`CommandRunner`].
#[derive(Debug)]
pub struct Committer<R> {
    runner: R,
    staging_dir: PathBuf,
    check: CommandSpec,
    install: CommandSpec,
}

impl<R: CommandRunner> Committer<R> {
    pub fn new(runner: R, config: &Config) -> Self {
        Committer {
            runner,
            staging_dir: config.staging_dir.clone(),
            check: config.check.clone(),
            install: config.install.clone(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Install `content` as `target` if the syntax-check authority accepts it.
    ///
    /// Returns `Err` only when the candidate cannot be staged. A rejected
    /// check or a failed install is a terminal [`CommitOutcome`] carrying the
    /// authority's diagnostic; in both cases `target` is left as it was.
    pub fn commit(&self, target: &Path, content: &str) -> Result<CommitOutcome, CommitError> {
        let staged = self.stage(content).map_err(CommitError::Staging)?;
        transition(CommitState::Idle, CommitState::Staged);
        info!(staged = %staged.display(), "staged candidate file");

        if let Some(diagnostic) = self.run_authority(&self.check, &staged, target) {
            transition(CommitState::Staged, CommitState::CheckFailed);
            error!(%diagnostic, "syntax check rejected the staged file");
            return Ok(CommitOutcome::failed(CommitState::CheckFailed, diagnostic));
        }
        transition(CommitState::Staged, CommitState::Checked);

        let mut warnings = Vec::new();
        let backup = match backup::create(target) {
            Ok(path) => {
                info!(backup = %path.display(), "backed up original");
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "backup failed; continuing without one");
                warnings.push(format!("backup failed, save continued without one: {e}"));
                None
            }
        };
        transition(CommitState::Checked, CommitState::BackedUp);

        if let Some(diagnostic) = self.run_authority(&self.install, &staged, target) {
            transition(CommitState::BackedUp, CommitState::WriteFailed);
            error!(%diagnostic, "install refused the staged file");
            let mut outcome = CommitOutcome::failed(CommitState::WriteFailed, diagnostic);
            outcome.backup = backup;
            outcome.warnings = warnings;
            return Ok(outcome);
        }
        transition(CommitState::BackedUp, CommitState::Written);

        if let Err(e) = staged.close() {
            warnings.push(format!("failed to remove staged file: {e}"));
        }

        let (state, document) = match SourceDocument::load(target) {
            Ok(doc) => {
                transition(CommitState::Written, CommitState::Reloaded);
                (CommitState::Reloaded, Some(doc))
            }
            Err(e) => {
                warn!(error = %e, "written file could not be reloaded");
                warnings.push(format!("written, but reloading failed: {e}"));
                (CommitState::Written, None)
            }
        };

        Ok(CommitOutcome {
            state,
            diagnostic: None,
            backup,
            warnings,
            document,
        })
    }

    /// Write `content` to a fresh, uniquely named file in the staging dir.
    ///
    /// The returned path removes the file when dropped.
    fn stage(&self, content: &str) -> std::io::Result<TempPath> {
        let mut file = tempfile::Builder::new()
            .prefix("sudoers-safe-edit.")
            .suffix(".tmp")
            .tempfile_in(&self.staging_dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(file.into_temp_path())
    }

    /// Run an authority; `Some(diagnostic)` when it failed or could not run.
    fn run_authority(&self, spec: &CommandSpec, staged: &Path, target: &Path) -> Option<String> {
        let args = spec.render_args(staged, target);
        match self.runner.run(&spec.program, &args) {
            Ok(output) if output.success => None,
            Ok(output) => {
                let diagnostic = output.diagnostic();
                Some(if diagnostic.is_empty() {
                    format!("{} exited with failure and no output", spec.program)
                } else {
                    diagnostic
                })
            }
            Err(e) => Some(format!("failed to run {}: {e}", spec.program)),
        }
    }
}

fn transition(from: CommitState, to: CommitState) {
    info!(?from, ?to, "commit state");
}
