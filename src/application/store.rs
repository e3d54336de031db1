//! BusinessStore - shared ownership of the one business record.
//!
//! The record lives behind an `RwLock`; each merge holds the write lock for
//! its whole application, so a concurrent read observes either the old or
//! the new record, never a torn one. Merges land in the order their calls
//! complete (last-applied-wins); there is no sequencing or staleness check.
//!
//! It uses `.expect()` on lock operations which will panic if locks are
//! poisoned.

use std::sync::RwLock;

use crate::domain::venture::{BusinessPatch, BusinessRecord};

/// Thread-safe holder of the session's business record.
#[derive(Debug, Default)]
pub struct BusinessStore {
    record: RwLock<BusinessRecord>,
}

impl BusinessStore {
    /// Creates a store holding a fresh, empty record.
    pub fn new() -> Self {
        Self {
            record: RwLock::new(BusinessRecord::new()),
        }
    }

    /// Returns a snapshot of the current record.
    pub fn snapshot(&self) -> BusinessRecord {
        self.record
            .read()
            .expect("BusinessStore: record lock poisoned")
            .clone()
    }

    /// Runs a closure against the current record without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&BusinessRecord) -> R) -> R {
        let record = self
            .record
            .read()
            .expect("BusinessStore: record lock poisoned");
        f(&record)
    }

    /// Merges a patch into the record.
    ///
    /// Accepts any well-typed patch; validation is the producer's problem.
    pub fn merge(&self, patch: BusinessPatch) {
        self.record
            .write()
            .expect("BusinessStore: record lock poisoned")
            .merge(patch);
    }
}
