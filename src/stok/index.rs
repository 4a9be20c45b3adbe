//! Projection rows and the row numbers users type.
//!
//! A projection is what a UI renders: the full store, or a filtered subset of it.
//! Each [`DisplayRecord`] remembers the position its record holds in the full
//! stored sequence, so selecting a row from a search result and then updating or
//! deleting it touches that same record, not whatever happens to sit at the same
//! row number in the unfiltered list.
//!
//! Users see 1-based numbers ([`DisplayIndex`]); the store works with 0-based
//! positions.

use crate::model::InventoryRecord;
use std::fmt;
use std::str::FromStr;

/// A 1-based row number as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// 0-based position in the stored sequence.
    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: DisplayIndex,
    pub record: InventoryRecord,
}

/// Rebuilds projection rows 1:1 from a full stored sequence.
pub fn index_records(records: Vec<InventoryRecord>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| DisplayRecord {
            index: DisplayIndex::from_position(position),
            record,
        })
        .collect()
}
