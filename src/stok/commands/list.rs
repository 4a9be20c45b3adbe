use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_records;
use crate::model::InventoryRecord;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let records = store.load_all()?;
    Ok(refresh_display(records))
}

/// Rebuilds the visible rows 1:1 from `records`.
pub fn refresh_display(records: Vec<InventoryRecord>) -> CmdResult {
    CmdResult::default().with_listed_records(index_records(records))
}
