use super::row;
use crate::validation::{validate_table, RowSection};

#[test]
fn all_valid_rows_are_ok() {
    let result = validate_table(
        &[row("env_reset", ""), row("timestamp_timeout", "15")],
        &[row("User_Alias ADMINS", "alice,bob")],
    );
    assert!(result.ok);
    assert!(result.errors().is_empty());
}

#[test]
fn empty_tables_are_ok() {
    assert!(validate_table(&[], &[]).ok);
}

#[test]
fn every_row_is_evaluated() {
    let result = validate_table(
        &[
            row("timestamp_timeout", "abc"),
            row("env_reset", ""),
            row("lecture", "sometimes"),
        ],
        &[row("ADMINS", ""), row("User_Alias OK", "alice")],
    );
    assert!(!result.ok);
    assert_eq!(result.defaults.len(), 3);
    assert_eq!(result.aliases.len(), 2);

    let errors = result.errors();
    let located: Vec<_> = errors.iter().map(|e| (e.section, e.index)).collect();
    assert_eq!(
        located,
        vec![
            (RowSection::Defaults, 0),
            (RowSection::Defaults, 2),
            (RowSection::Aliases, 0),
        ]
    );
}

#[test]
fn single_bad_alias_fails_aggregate() {
    let result = validate_table(&[row("env_reset", "")], &[row("User_Alias X", "")]);
    assert!(!result.ok);
    assert!(result.defaults[0].ok);
}
