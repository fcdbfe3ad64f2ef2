mod aggregation;

pub use aggregation::{validate_table, RowError, RowSection, TableValidation};

use serde::Serialize;

use crate::domain::AliasIdentity;
use crate::sudoers::{lookup, KeyKind};

const BOOL_VALUES: [&str; 3] = ["", "true", "false"];

/// Outcome of checking one row. Validation never fails with an error; a bad
/// value is reported here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            ok: true,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        ValidationResult {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check a Defaults row against the registry constraints for its key.
///
/// - empty key → invalid
/// - bool → `""`, `"true"` or `"false"`
/// - enum → one of the registered choices
/// - int → base-10 integer within the registered inclusive bounds
/// - path/text → any value
pub fn validate_default(key: &str, value: &str) -> ValidationResult {
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return ValidationResult::invalid("setting name is empty");
    }

    match lookup(key).kind {
        KeyKind::Bool => {
            if BOOL_VALUES.contains(&value) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(format!(
                    "{key}: expected empty, 'true' or 'false', got '{value}'"
                ))
            }
        }
        KeyKind::Enum { choices } => {
            if choices.contains(&value) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(format!(
                    "{key}: '{value}' is not one of {}",
                    choices.join(", ")
                ))
            }
        }
        KeyKind::Int { min, max } => match value.parse::<i64>() {
            Ok(v) if (min..=max).contains(&v) => ValidationResult::valid(),
            Ok(v) => {
                ValidationResult::invalid(format!("{key}: {v} is outside the range {min}..={max}"))
            }
            Err(_) => ValidationResult::invalid(format!("{key}: '{value}' is not an integer")),
        },
        KeyKind::Path | KeyKind::Text => ValidationResult::valid(),
    }
}

/// Check an alias row.
///
/// The identity must read `<Kind>_Alias <Name>` and must not contain `=`,
/// which catches a `Key=Value` pasted into the identity column. The
/// definition must be non-empty.
pub fn validate_alias(identity: &str, definition: &str) -> ValidationResult {
    let identity = identity.trim();
    if identity.is_empty() {
        return ValidationResult::invalid("alias identity is empty");
    }
    if identity.contains('=') {
        return ValidationResult::invalid(format!(
            "alias identity '{identity}' must not contain '='"
        ));
    }
    if AliasIdentity::parse(identity).is_none() {
        return ValidationResult::invalid(format!(
            "alias identity '{identity}' must be '<Kind>_Alias <Name>' \
             with Kind one of User, Runas, Host, Cmnd"
        ));
    }
    if definition.trim().is_empty() {
        return ValidationResult::invalid(format!("{identity}: definition is empty"));
    }
    ValidationResult::valid()
}

#[cfg(test)]
mod tests;
