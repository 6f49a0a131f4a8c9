//! Result store
//!
//! Holds the last record accepted by the submission gate so the landing
//! page can display it.
//!
//! # Contract
//!
//! - Starts out holding an all-empty placeholder record
//! - Only the gate writes, and only records that just passed validation
//! - A write replaces the whole record in one step
//! - Never cleared during a session

mod memory;

pub use memory::MemoryResultStore;

use crate::schema::NormalizedRecord;

/// Write/read contract the gate and the display depend on
pub trait ResultStore: std::fmt::Debug {
    /// Replace the stored record
    fn write(&mut self, record: NormalizedRecord);

    /// Current stored record
    fn read(&self) -> NormalizedRecord;
}
