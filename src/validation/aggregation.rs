use serde::Serialize;

use super::{validate_alias, validate_default, ValidationResult};
use crate::edit::EditableRow;

/// Which table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSection {
    Defaults,
    Aliases,
}

/// One failed row, located by table and index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub section: RowSection,
    pub index: usize,
    pub reason: String,
}

/// Per-row results for both tables plus the aggregate verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableValidation {
    pub ok: bool,
    pub defaults: Vec<ValidationResult>,
    pub aliases: Vec<ValidationResult>,
}

impl TableValidation {
    /// Every failed row, defaults first.
    pub fn errors(&self) -> Vec<RowError> {
        let failures = |section: RowSection, results: &[ValidationResult]| {
            results
                .iter()
                .enumerate()
                .filter(|(_, r)| !r.ok)
                .map(|(index, r)| RowError {
                    section,
                    index,
                    reason: r.reason.clone().unwrap_or_default(),
                })
                .collect::<Vec<_>>()
        };
        let mut errors = failures(RowSection::Defaults, &self.defaults);
        errors.extend(failures(RowSection::Aliases, &self.aliases));
        errors
    }
}

/// Validate every row of both tables.
///
/// Does not stop at the first failure: every row gets a result so all
/// invalid rows can be reported together. `ok` holds iff every row is ok.
pub fn validate_table(defaults: &[EditableRow], aliases: &[EditableRow]) -> TableValidation {
    let defaults: Vec<ValidationResult> = defaults
        .iter()
        .map(|row| validate_default(&row.identity, &row.value))
        .collect();
    let aliases: Vec<ValidationResult> = aliases
        .iter()
        .map(|row| validate_alias(&row.identity, &row.value))
        .collect();
    let ok = defaults.iter().chain(aliases.iter()).all(|r| r.ok);
    TableValidation {
        ok,
        defaults,
        aliases,
    }
}
