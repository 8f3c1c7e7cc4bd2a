//! Null Memo Reader
//!
//! Stand-in for tables that have no memo file.

use crate::error::Result;

use super::{MemoLookup, Record};

/// Reader that answers every lookup with a null record.
///
/// Accepts any index, including zero and negatives, and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMemoReader;

impl NullMemoReader {
    pub fn lookup(&self, _index: i64) -> Result<Record> {
        Ok(Record::null())
    }

    /// Nothing to release
    pub fn close(&mut self) {}
}

impl MemoLookup for NullMemoReader {
    fn lookup(&mut self, index: i64) -> Result<Record> {
        NullMemoReader::lookup(self, index)
    }
}
