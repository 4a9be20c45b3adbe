use crate::commands::{Action, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_records, DisplayIndex, DisplayRecord};
use crate::store::RecordStore;
use tracing::info;

use super::helpers::{resolve_selection, NO_SELECTION_DELETE};

pub fn run<S: RecordStore>(store: &mut S, selected: Option<usize>) -> Result<CmdResult> {
    let mut records = store.load_all()?;
    let position = match resolve_selection(selected, &records, NO_SELECTION_DELETE) {
        Ok(position) => position,
        Err(warning) => return Ok(warning),
    };

    let removed = records.remove(position);
    store.save_all(&records)?;

    let index = DisplayIndex::from_position(position);
    info!(%index, name = %removed.name, "record deleted");

    let mut result = CmdResult::default()
        .with_action(Action::Delete)
        .with_listed_records(index_records(records));
    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {}",
        index, removed.name
    )));
    Ok(result.with_affected_records(vec![DisplayRecord {
        index,
        record: removed,
    }]))
}
