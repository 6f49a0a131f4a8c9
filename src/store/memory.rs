//! In-memory result store

use chrono::{DateTime, Utc};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{FormSchema, NormalizedRecord};

use super::ResultStore;

/// Process-local store, created once per application run and passed
/// explicitly to whoever needs it.
#[derive(Debug, Clone)]
pub struct MemoryResultStore {
    record: NormalizedRecord,
    revision: u64,
    written_at: Option<DateTime<Utc>>,
}

impl MemoryResultStore {
    /// Store holding the placeholder record for `schema`
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            record: NormalizedRecord::placeholder(schema),
            revision: 0,
            written_at: None,
        }
    }

    /// Number of writes so far; 0 means the placeholder is still held
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether any submission has been stored yet
    pub fn has_submission(&self) -> bool {
        self.revision > 0
    }

    /// Time of the last write
    pub fn written_at(&self) -> Option<DateTime<Utc>> {
        self.written_at
    }
}

impl ResultStore for MemoryResultStore {
    fn write(&mut self, record: NormalizedRecord) {
        self.record = record;
        self.revision += 1;
        self.written_at = Some(Utc::now());

        let revision = self.revision.to_string();
        log_event_with_fields(Event::StoreWritten, &[("revision", &revision)]);
    }

    fn read(&self) -> NormalizedRecord {
        self.record.clone()
    }
}
