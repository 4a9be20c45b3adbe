use super::RecordStore;
use crate::error::Result;
use crate::model::InventoryRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<InventoryRecord>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save_all` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<InventoryRecord>> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[InventoryRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Unit;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.records.push(InventoryRecord::new(
                    format!("Item {}", i + 1),
                    format!("{}", (i + 1) * 10),
                    Unit::ALL[i % Unit::ALL.len()],
                ));
            }
            self
        }

        pub fn with_record(mut self, name: &str, quantity: &str, unit: Unit) -> Self {
            self.store
                .records
                .push(InventoryRecord::new(name, quantity, unit));
            self
        }
    }
}
