//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single entry
//! point for every stok operation, whatever UI sits on top.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It holds no
//! business logic and does no presentation. In particular it never remembers a
//! selection; the caller passes one in on every `update` and `delete`.
//!
//! `StokApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `StokApi<FileStore>`
//! - Testing: `StokApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::{RecordForm, Scope};
use crate::store::RecordStore;

pub struct StokApi<S: RecordStore> {
    store: S,
    paths: commands::StokPaths,
}

impl<S: RecordStore> StokApi<S> {
    pub fn new(store: S, paths: commands::StokPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_record(&mut self, form: &RecordForm) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, form)
    }

    pub fn update_record(
        &mut self,
        selected: Option<DisplayIndex>,
        form: &RecordForm,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, position(selected), form)
    }

    pub fn delete_record(&mut self, selected: Option<DisplayIndex>) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, position(selected))
    }

    pub fn search_records(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn data_path(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::paths::run(&self.paths, scope)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths, scope)
    }
}

fn position(selected: Option<DisplayIndex>) -> Option<usize> {
    selected.map(|idx| idx.position())
}

pub use crate::commands::config::ConfigAction;
pub use commands::{Action, CmdMessage, CmdResult, MessageLevel, StokPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use crate::store::memory::InMemoryStore;

    fn api() -> StokApi<InMemoryStore> {
        StokApi::new(
            InMemoryStore::new(),
            StokPaths {
                project: None,
                global: std::env::temp_dir(),
            },
        )
    }

    #[test]
    fn selection_is_translated_to_store_position() {
        let mut api = api();
        api.add_record(&RecordForm::new("A", "1", Unit::Metre)).unwrap();
        api.add_record(&RecordForm::new("B", "2", Unit::Adet)).unwrap();

        let selected: DisplayIndex = "2".parse().unwrap();
        let result = api.delete_record(Some(selected)).unwrap();

        assert_eq!(result.action, Some(Action::Delete));
        assert_eq!(result.affected_records[0].record.name, "B");
        assert_eq!(api.list_records().unwrap().listed_records.len(), 1);
    }

    #[test]
    fn selection_from_filtered_view_targets_same_record() {
        let mut api = api();
        api.add_record(&RecordForm::new("Metre Kablo", "5", Unit::Metre))
            .unwrap();
        api.add_record(&RecordForm::new("Civata", "100", Unit::Adet))
            .unwrap();

        let found = api.search_records("civ").unwrap().listed_records;
        let selected = found[0].index;
        api.update_record(Some(selected), &RecordForm::new("Civata M8", "90", Unit::Adet))
            .unwrap();

        let all = api.list_records().unwrap().listed_records;
        assert_eq!(all[0].record.name, "Metre Kablo");
        assert_eq!(all[1].record.name, "Civata M8");
    }

    #[test]
    fn update_without_selection_warns() {
        let mut api = api();
        let result = api
            .update_record(None, &RecordForm::new("A", "1", Unit::Metre))
            .unwrap();
        assert!(result.has_warnings());
    }
}
