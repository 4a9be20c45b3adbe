//! # Stok Architecture
//!
//! Stok is a **UI-agnostic inventory library**. Records are `(name, quantity, unit)`
//! triples kept in a single JSON file; the command-line client in `main.rs` is one
//! front end, but a form UI would drive the exact same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs, logging.rs)         │
//! │  - Parses arguments, renders the table, colors messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves scope → config → data file                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / update / delete / search / list                    │
//! │  - Validation warnings are data, not errors                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait: load_all / save_all                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Explicit Selection
//!
//! A form UI has exactly one piece of state the controller cares about: which row
//! is selected. Stok never reads it from a widget. `update` and `delete` take the
//! selection as an `Option<usize>` store position, and every projection row carries
//! the store position it came from (see [`index`]). A row picked from a filtered
//! search result therefore addresses the record the user actually saw.
//!
//! ## Persistence
//!
//! Every mutation loads the full sequence, edits it, and rewrites the whole file
//! through a temp file + rename. There is no cache; the file is the truth.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Form controller operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `InventoryRecord`, `Unit`, `RecordForm`, `Scope`
//! - [`index`]: Projection rows and user-facing row numbers
//! - [`config`]: Per-scope configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
