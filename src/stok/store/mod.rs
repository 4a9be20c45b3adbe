//! # Storage Layer
//!
//! The [`RecordStore`] trait is the whole persistence contract: read the full
//! sequence, write the full sequence. There are no partial updates; callers load,
//! edit in memory, and save everything back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file
//!   - `[[name, quantity, unit], ...]` with 4-space indentation
//!   - Non-ASCII text written literally
//!   - Atomic rewrite via temp file + rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! ./
//! ├── products.json       # All records (JSON array of triples)
//! └── stok.json           # Scope configuration (optional)
//! ```

use crate::error::Result;
use crate::model::InventoryRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait RecordStore {
    /// Load every stored record, in stored order. A store that has never been
    /// written yields an empty sequence.
    fn load_all(&self) -> Result<Vec<InventoryRecord>>;

    /// Replace the stored sequence with `records`.
    fn save_all(&mut self, records: &[InventoryRecord]) -> Result<()>;
}
