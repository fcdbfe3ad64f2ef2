mod aggregation;
mod defaults;

use crate::edit::EditableRow;

fn row(identity: &str, value: &str) -> EditableRow {
    EditableRow::new(identity, value)
}
