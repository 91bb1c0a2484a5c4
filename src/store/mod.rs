//! In-memory address storage.
//!
//! # Design Decisions
//! - One record per id; the stored record's `id` always equals its key
//! - Handlers run on a multi-threaded runtime, so the map is sharded
//!   (`DashMap`) and create uses the entry API to make the exists-check
//!   and insert a single atomic step
//! - Nothing is persisted; the store lives and dies with the service

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A stored address entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Identity key of the record.
    pub id: u64,
    /// The address value, taken verbatim from the request body.
    pub address: String,
}

/// A thread-safe map of address records keyed by id.
#[derive(Clone, Default)]
pub struct AddressStore {
    inner: Arc<DashMap<u64, AddressRecord>>,
}

impl AddressStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert a new record for `id`.
    ///
    /// Fails with a copy of the existing record when the id is already
    /// taken, leaving the store unchanged.
    pub fn insert(&self, id: u64, address: String) -> Result<(), AddressRecord> {
        match self.inner.entry(id) {
            Entry::Occupied(existing) => Err(existing.get().clone()),
            Entry::Vacant(slot) => {
                slot.insert(AddressRecord { id, address });
                tracing::debug!(id, "Address created");
                Ok(())
            }
        }
    }

    /// Overwrite the address value of an existing record.
    ///
    /// Returns `false` when no record exists for `id`; the id field itself
    /// is never rewritten.
    pub fn update(&self, id: u64, address: String) -> bool {
        match self.inner.get_mut(&id) {
            Some(mut record) => {
                record.address = address;
                tracing::debug!(id, "Address updated");
                true
            }
            None => false,
        }
    }

    /// Remove the record for `id`. Returns `false` when it was not present.
    pub fn remove(&self, id: u64) -> bool {
        let removed = self.inner.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "Address removed");
        }
        removed
    }

    /// Copy of the record for `id`, if present.
    pub fn get(&self, id: u64) -> Option<AddressRecord> {
        self.inner.get(&id).map(|r| r.value().clone())
    }

    /// Snapshot of every stored record, in unspecified order.
    pub fn all(&self) -> Vec<AddressRecord> {
        self.inner.iter().map(|r| r.value().clone()).collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
