use crate::commands::{Action, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_records, DisplayIndex, DisplayRecord};
use crate::model::RecordForm;
use crate::store::RecordStore;
use tracing::info;

use super::helpers::{resolve_selection, validate_form, NO_SELECTION_UPDATE};

pub fn run<S: RecordStore>(
    store: &mut S,
    selected: Option<usize>,
    form: &RecordForm,
) -> Result<CmdResult> {
    let mut records = store.load_all()?;
    let position = match resolve_selection(selected, &records, NO_SELECTION_UPDATE) {
        Ok(position) => position,
        Err(warning) => return Ok(warning),
    };
    if let Err(warning) = validate_form(form) {
        return Ok(warning);
    }

    let record = form.to_record();
    records[position] = record.clone();
    store.save_all(&records)?;

    let index = DisplayIndex::from_position(position);
    info!(%index, name = %record.name, "record updated");

    let mut result = CmdResult::default()
        .with_action(Action::Update)
        .with_affected_records(vec![DisplayRecord {
            index,
            record: record.clone(),
        }])
        .with_listed_records(index_records(records))
        .clearing_form();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        index, record.name
    )));
    Ok(result)
}
