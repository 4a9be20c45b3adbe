use crate::commands::{Action, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_records, DisplayIndex, DisplayRecord};
use crate::model::RecordForm;
use crate::store::RecordStore;
use tracing::info;

use super::helpers::validate_form;

pub fn run<S: RecordStore>(store: &mut S, form: &RecordForm) -> Result<CmdResult> {
    if let Err(warning) = validate_form(form) {
        return Ok(warning);
    }

    let mut records = store.load_all()?;
    let record = form.to_record();
    records.push(record.clone());
    store.save_all(&records)?;

    let index = DisplayIndex::from_position(records.len() - 1);
    info!(%index, name = %record.name, "record added");

    let mut result = CmdResult::default()
        .with_action(Action::Add)
        .with_affected_records(vec![DisplayRecord {
            index,
            record: record.clone(),
        }])
        .with_listed_records(index_records(records))
        .clearing_form();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {}",
        index, record.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::MISSING_FIELDS;
    use crate::model::{InventoryRecord, Unit};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_and_persists_record() {
        let mut store = StoreFixture::new().with_records(2).store;
        let form = RecordForm::new("Metre Kablo", "5", Unit::Metre);

        let result = run(&mut store, &form).unwrap();

        let stored = store.load_all().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(
            stored[2],
            InventoryRecord::new("Metre Kablo", "5", Unit::Metre)
        );
        assert_eq!(result.listed_records.len(), 3);
        assert_eq!(result.affected_records[0].index.to_string(), "3");
        assert!(result.clear_form);
        assert_eq!(result.action, Some(Action::Add));
    }

    #[test]
    fn keeps_quantity_as_text() {
        let mut store = InMemoryStore::new();
        run(&mut store, &RecordForm::new("Vida", "007", Unit::Adet)).unwrap();
        assert_eq!(store.load_all().unwrap()[0].quantity, "007");
    }

    #[test]
    fn empty_name_warns_without_saving() {
        let mut store = StoreFixture::new().with_records(1).store;

        let result = run(&mut store, &RecordForm::new("", "5", Unit::Kilo)).unwrap();

        assert!(result.has_warnings());
        assert_eq!(result.messages[0].content, MISSING_FIELDS);
        assert!(!result.clear_form);
        assert_eq!(store.load_all().unwrap().len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn empty_quantity_warns_without_saving() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &RecordForm::new("Kablo", "", Unit::Metre)).unwrap();
        assert!(result.has_warnings());
        assert!(store.load_all().unwrap().is_empty());
    }
}
