use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_records, DisplayRecord};
use crate::store::RecordStore;
use tracing::debug;

/// Case-insensitive substring match on the name field. Does not touch the store.
pub fn run<S: RecordStore>(store: &S, term: &str) -> Result<CmdResult> {
    let records = store.load_all()?;
    let listed = filter_by_name(index_records(records), term);
    debug!(term, matches = listed.len(), "search");
    Ok(CmdResult::default().with_listed_records(listed))
}

/// Keeps the rows whose name contains `term`, ignoring case. Rows keep their
/// store positions.
pub fn filter_by_name(rows: Vec<DisplayRecord>, term: &str) -> Vec<DisplayRecord> {
    let term_lower = term.to_lowercase();
    rows.into_iter()
        .filter(|dr| dr.record.name.to_lowercase().contains(&term_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryRecord, Unit};
    use crate::store::memory::fixtures::StoreFixture;

    fn sample() -> StoreFixture {
        StoreFixture::new()
            .with_record("Metre Kablo", "5", Unit::Metre)
            .with_record("Civata", "100", Unit::Adet)
    }

    #[test]
    fn matches_name_case_insensitively() {
        let store = sample().store;
        let result = run(&store, "met").unwrap();

        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(
            result.listed_records[0].record,
            InventoryRecord::new("Metre Kablo", "5", Unit::Metre)
        );
    }

    #[test]
    fn ignores_quantity_and_unit() {
        let store = sample().store;
        assert!(run(&store, "100").unwrap().listed_records.is_empty());
        assert!(run(&store, "adet").unwrap().listed_records.is_empty());
    }

    #[test]
    fn filtered_rows_keep_store_positions() {
        let store = sample().store;
        let result = run(&store, "CIVATA").unwrap();
        assert_eq!(result.listed_records[0].index.position(), 1);
    }

    #[test]
    fn empty_term_matches_all() {
        let store = sample().store;
        assert_eq!(run(&store, "").unwrap().listed_records.len(), 2);
    }

    #[test]
    fn does_not_mutate_store() {
        let store = sample().store;
        run(&store, "kablo").unwrap();
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load_all().unwrap().len(), 2);
    }
}
