//! Editable view of a loaded sudoers file and the three front-end entry
//! points: [`Session::load`], [`Session::validate`], [`Session::commit`].

mod state;

pub use state::{EditState, EditableRow};

use std::path::{Path, PathBuf};

use crate::commit::{CommandRunner, CommitError, CommitOutcome, Committer};
use crate::sudoers::{LoadError, SourceDocument};
use crate::validation::TableValidation;

/// Errors from applying a requested edit.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("no Defaults setting named '{0}' in the file")]
    UnknownSetting(String),
}

/// A loaded sudoers file together with the rows being edited.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    document: SourceDocument,
    state: EditState,
}

impl Session {
    /// Read `path` and populate rows from it.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let document = SourceDocument::load(path)?;
        let state = EditState::from_document(&document);
        Ok(Session {
            path: path.to_path_buf(),
            document,
            state,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &SourceDocument {
        &self.document
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditState {
        &mut self.state
    }

    /// Validate every row of the current edit state.
    pub fn validate(&self) -> TableValidation {
        self.state.validate()
    }

    /// Validate, then run the commit pipeline against the session's file.
    ///
    /// On a successful write the session is rebuilt from the file as it now
    /// exists on disk, so every row's original value reflects the new file.
    /// Any other outcome leaves the session's rows as they were, ready for
    /// another attempt.
    pub fn commit<R: CommandRunner>(
        &mut self,
        committer: &Committer<R>,
    ) -> Result<CommitOutcome, CommitError> {
        let validation = self.validate();
        if !validation.ok {
            return Err(CommitError::Invalid(validation));
        }

        let mut outcome = committer.commit(&self.path, &self.state.render())?;
        if let Some(document) = outcome.document.take() {
            self.state = EditState::from_document(&document);
            self.document = document;
        }
        Ok(outcome)
    }
}
