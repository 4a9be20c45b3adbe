use crate::commands::CmdResult;
use crate::index::DisplayIndex;
use crate::model::{InventoryRecord, RecordForm};

pub const MISSING_FIELDS: &str = "Please fill in all fields.";
pub const NO_SELECTION_UPDATE: &str = "Please select the record to update.";
pub const NO_SELECTION_DELETE: &str = "Please select the record to delete.";

/// Warns when the form is missing a name or quantity.
pub fn validate_form(form: &RecordForm) -> Result<(), CmdResult> {
    if form.is_complete() {
        Ok(())
    } else {
        Err(CmdResult::warning(MISSING_FIELDS))
    }
}

/// Turns an optional selection into a valid position in `records`.
///
/// `None` means nothing is selected; a position past the end means the view the
/// selection came from is stale.
pub fn resolve_selection(
    selected: Option<usize>,
    records: &[InventoryRecord],
    missing: &str,
) -> Result<usize, CmdResult> {
    match selected {
        None => Err(CmdResult::warning(missing)),
        Some(position) if position >= records.len() => Err(CmdResult::warning(format!(
            "Index {} not found.",
            DisplayIndex::from_position(position)
        ))),
        Some(position) => Ok(position),
    }
}
