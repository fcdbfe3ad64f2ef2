use serde::{Deserialize, Serialize};

use super::EditError;
use crate::domain::AliasIdentity;
use crate::sudoers::{serialize, split_default_body, PathList, SourceDocument, SECURE_PATH};
use crate::validation::{validate_table, TableValidation};

/// One editable row: identity (Defaults key or alias identity), the current
/// value, and the value it had when the file was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableRow {
    #[serde(alias = "key")]
    pub identity: String,
    #[serde(alias = "definition", default)]
    pub value: String,
    #[serde(default)]
    pub original: String,
}

impl EditableRow {
    /// A row whose original value equals its current value.
    pub fn new(identity: &str, value: &str) -> Self {
        EditableRow {
            identity: identity.to_string(),
            value: value.to_string(),
            original: value.to_string(),
        }
    }

    pub fn changed(&self) -> bool {
        self.value != self.original
    }
}

/// Rows for both editable tables plus the passthrough lines they will be
/// merged with.
///
/// Alias rows use the identity `"<Kind>_Alias <Name>"`, so the serialized
/// alias line keeps its declaration keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditState {
    #[serde(default)]
    pub defaults: Vec<EditableRow>,
    #[serde(default)]
    pub aliases: Vec<EditableRow>,
    #[serde(skip)]
    passthrough: Vec<String>,
}

impl EditState {
    /// Populate rows from a parsed document.
    pub fn from_document(doc: &SourceDocument) -> Self {
        let defaults = doc
            .defaults()
            .into_iter()
            .map(|body| {
                let (key, value) = split_default_body(body);
                EditableRow::new(key, value)
            })
            .collect();
        let aliases = doc
            .aliases()
            .into_iter()
            .map(|a| {
                EditableRow::new(
                    &AliasIdentity::new(a.kind, a.name).to_string(),
                    a.definition,
                )
            })
            .collect();
        EditState {
            defaults,
            aliases,
            passthrough: doc.passthrough().into_iter().map(String::from).collect(),
        }
    }

    /// Replace the passthrough lines, keeping the rows.
    ///
    /// Used when rows arrive from outside (e.g. JSON) and must be merged with
    /// the lines of a freshly loaded file.
    pub fn with_passthrough(mut self, doc: &SourceDocument) -> Self {
        self.passthrough = doc.passthrough().into_iter().map(String::from).collect();
        self
    }

    pub fn passthrough(&self) -> &[String] {
        &self.passthrough
    }

    pub fn validate(&self) -> TableValidation {
        validate_table(&self.defaults, &self.aliases)
    }

    /// Merge rows and passthrough lines into sudoers text.
    ///
    /// Identities and values are trimmed. Every row is written whether or not
    /// it changed.
    pub fn render(&self) -> String {
        let defaults: Vec<(&str, &str)> = self
            .defaults
            .iter()
            .map(|r| (r.identity.trim(), r.value.trim()))
            .collect();
        let aliases: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|r| (r.identity.trim(), r.value.trim()))
            .collect();
        let passthrough: Vec<&str> = self.passthrough.iter().map(String::as_str).collect();
        serialize(&defaults, &aliases, &passthrough)
    }

    /// Whether any row differs from its loaded value.
    pub fn is_dirty(&self) -> bool {
        self.defaults
            .iter()
            .chain(self.aliases.iter())
            .any(EditableRow::changed)
    }

    /// Set a Defaults value, appending a new row when the key is absent.
    pub fn set_default(&mut self, key: &str, value: &str) {
        let key = key.trim();
        match self.defaults.iter_mut().find(|r| r.identity.trim() == key) {
            Some(row) => row.value = value.to_string(),
            None => self.defaults.push(EditableRow {
                identity: key.to_string(),
                value: value.to_string(),
                original: String::new(),
            }),
        }
    }

    /// Remove every Defaults row for `key`.
    pub fn unset_default(&mut self, key: &str) -> Result<(), EditError> {
        let key = key.trim();
        let before = self.defaults.len();
        self.defaults.retain(|r| r.identity.trim() != key);
        if self.defaults.len() == before {
            return Err(EditError::UnknownSetting(key.to_string()));
        }
        Ok(())
    }

    /// The current `secure_path` directories (empty when unset).
    pub fn secure_path(&self) -> PathList {
        self.defaults
            .iter()
            .find(|r| r.identity.trim() == SECURE_PATH)
            .map(|r| PathList::decode(r.value.trim()))
            .unwrap_or_default()
    }

    /// Store `dirs` as the `secure_path` value. An empty list clears the
    /// value of an existing row, leaving a bare `Defaults secure_path`; it
    /// never adds a row the file did not have.
    pub fn set_secure_path(&mut self, dirs: &PathList) {
        let has_row = self.defaults.iter().any(|r| r.identity.trim() == SECURE_PATH);
        if dirs.is_empty() && !has_row {
            return;
        }
        self.set_default(SECURE_PATH, &dirs.encode());
    }
}
