//! Shared Memo Reader
//!
//! Serializes lookups from several threads onto one file handle.

use std::fs::File;
use std::io::{BufReader, Read, Seek};

use parking_lot::Mutex;

use crate::error::Result;

use super::{MemoLookup, MemoReader, Record};

/// A `MemoReader` behind a mutex.
///
/// ## Concurrency:
/// - The file cursor is the only shared state; each lookup holds the lock for
///   its whole seek + read
/// - All methods use `&self`
pub struct SharedMemoReader<R = BufReader<File>> {
    inner: Mutex<MemoReader<R>>,
    block_size: u16,
}

impl<R: Read + Seek> SharedMemoReader<R> {
    pub fn new(reader: MemoReader<R>) -> Self {
        let block_size = reader.block_size();
        Self {
            inner: Mutex::new(reader),
            block_size,
        }
    }

    pub fn lookup(&self, index: i64) -> Result<Record> {
        self.inner.lock().lookup(index)
    }

    /// Release the handle for every holder
    pub fn close(&self) {
        self.inner.lock().close();
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().is_open()
    }

    pub fn block_size(&self) -> u16 {
        self.block_size
    }

    pub fn into_inner(self) -> MemoReader<R> {
        self.inner.into_inner()
    }
}

impl<R: Read + Seek> From<MemoReader<R>> for SharedMemoReader<R> {
    fn from(reader: MemoReader<R>) -> Self {
        Self::new(reader)
    }
}

impl<R: Read + Seek> MemoLookup for SharedMemoReader<R> {
    fn lookup(&mut self, index: i64) -> Result<Record> {
        self.inner.get_mut().lookup(index)
    }
}
