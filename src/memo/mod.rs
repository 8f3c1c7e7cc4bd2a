//! Memo Module
//!
//! Random-access reading of FPT memo files, the auxiliary files holding the
//! variable-length text and binary fields of a DBF table.
//!
//! ## Responsibilities
//! - Decode the fixed file header once at open time
//! - Resolve a block index to a byte offset and read the record stored there
//! - Offer a null reader for tables without a memo file
//! - Find the memo file that sits beside a table
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Header (512 bytes, big-endian)                           │
//! │   NextFree: u32 (4) | Reserved: u16 (2) | BlockSize: u16 │
//! │   Reserved (504)                                         │
//! ├──────────────────────────────────────────────────────────┤
//! │ Block at offset index * BlockSize                        │
//! │   [Type: u32][Length: u32][Data: Length bytes]           │
//! │   (Data may run over several blocks)                     │
//! ├──────────────────────────────────────────────────────────┤
//! │ ... further blocks ...                                   │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod block;
mod header;
mod null;
mod reader;
mod shared;

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::MemoError;

pub use block::{BlockHeader, RecordType};
pub use header::FileHeader;
pub use null::NullMemoReader;
pub use reader::MemoReader;
pub use shared::SharedMemoReader;

// =============================================================================
// Shared Constants
// =============================================================================

/// File header size: NextFree (4) + Reserved1 (2) + BlockSize (2) + Reserved2 (504)
pub const HEADER_SIZE: usize = 512;

/// Size of the opaque trailing region of the file header
pub const RESERVED2_SIZE: usize = 504;

/// Block header size: Type (4) + Length (4)
pub const BLOCK_HEADER_SIZE: u64 = 8;

/// Extension of memo files, matched case-insensitively
pub const MEMO_EXTENSION: &str = "fpt";

// =============================================================================
// Record
// =============================================================================

/// A memo record as handed to callers.
///
/// Both fields are `None` only when produced by a [`NullMemoReader`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub record_type: Option<RecordType>,
    pub data: Option<Bytes>,
}

impl Record {
    pub fn new(record_type: RecordType, data: Bytes) -> Self {
        Self {
            record_type: Some(record_type),
            data: Some(data),
        }
    }

    /// The record returned when no memo file exists
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.record_type.is_none() && self.data.is_none()
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

// =============================================================================
// Lookup Capability
// =============================================================================

/// Anything that can resolve a block index to a memo record.
///
/// Implemented by the file-backed [`MemoReader`], the no-op
/// [`NullMemoReader`] and the locking [`SharedMemoReader`], so table decoders
/// can hold one without caring which.
pub trait MemoLookup {
    fn lookup(&mut self, index: i64) -> Result<Record>;
}

impl<T: MemoLookup + ?Sized> MemoLookup for Box<T> {
    fn lookup(&mut self, index: i64) -> Result<Record> {
        (**self).lookup(index)
    }
}

// =============================================================================
// Discovery
// =============================================================================

/// Find the memo file stored next to a table.
///
/// Matches a sibling with the table's stem and the `fpt` extension, ignoring
/// case on both (`people.dbf` → `PEOPLE.FPT` is found). When several files
/// match, the lexicographically smallest path wins.
pub fn locate(table_path: impl AsRef<Path>) -> Option<PathBuf> {
    let table_path = table_path.as_ref();
    let stem = table_path.file_stem()?.to_string_lossy().to_lowercase();

    let dir = match table_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_memo_file_for(path, &stem))
        .collect();

    candidates.sort();
    candidates.into_iter().next()
}

fn is_memo_file_for(path: &Path, stem: &str) -> bool {
    let matches_stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase() == stem)
        .unwrap_or(false);
    let matches_ext = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(MEMO_EXTENSION))
        .unwrap_or(false);
    matches_stem && matches_ext
}

/// Open the memo file belonging to a table.
///
/// Returns a file-backed reader when a memo file is found. Otherwise returns a
/// [`NullMemoReader`] if `config.ignore_missing_memo` is set, or fails with
/// [`MemoError::MissingMemoFile`].
pub fn open_for_table(
    table_path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<Box<dyn MemoLookup + Send>> {
    let table_path = table_path.as_ref();

    match locate(table_path) {
        Some(memo_path) => Ok(Box::new(MemoReader::open_with_config(
            &memo_path, config,
        )?)),
        None if config.ignore_missing_memo => {
            tracing::debug!(
                "No memo file beside {}, using null reader",
                table_path.display()
            );
            Ok(Box::new(NullMemoReader))
        }
        None => Err(MemoError::MissingMemoFile(table_path.to_path_buf())),
    }
}
