// File: crates/chart-dataset/src/entry.rs
// Summary: Single plotted point (x-index bucket + value) with a stable identity handle.
// Notes:
// - Equality (`==`) compares the plotted data only. Identity is carried by
//   `EntryId` and checked with `Entry::is_same`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle for an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 { self.0 }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entry {
    #[serde(skip, default = "EntryId::next")]
    id: EntryId,
    pub x_index: i64,
    pub value: f64,
}

impl Entry {
    /// Create an entry with a fresh identity.
    pub fn new(x_index: i64, value: f64) -> Self {
        Self { id: EntryId::next(), x_index, value }
    }

    pub fn id(&self) -> EntryId { self.id }

    /// True when both values are the same logical entry (clones included).
    pub fn is_same(&self, other: &Entry) -> bool { self.id == other.id }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.x_index == other.x_index && self.value == other.value
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry, xIndex: {}, value {}", self.x_index, self.value)
    }
}

impl From<(i64, f64)> for Entry {
    fn from((x_index, value): (i64, f64)) -> Self { Self::new(x_index, value) }
}
