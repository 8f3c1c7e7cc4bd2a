//! # fptmemo
//!
//! A reader for FPT memo files, the companion files in which DBF tables keep
//! their variable-length text and binary fields:
//! - Fixed 512-byte header parsed once at open time
//! - Random-access record lookup by block index
//! - Null reader for tables that have no memo file
//! - Memo file discovery beside a table
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Table decoder (memo field → index)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ lookup(index)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      MemoLookup                             │
//! └──────────┬──────────────────┬───────────────────┬───────────┘
//!            │                  │                   │
//!            ▼                  ▼                   ▼
//!   ┌─────────────────┐ ┌───────────────┐ ┌──────────────────┐
//!   │   MemoReader    │ │NullMemoReader │ │ SharedMemoReader │
//!   │ (seek + read)   │ │   (no file)   │ │     (Mutex)      │
//!   └────────┬────────┘ └───────────────┘ └────────┬─────────┘
//!            │                                     │
//!            ▼                                     │
//!   ┌─────────────────┐                            │
//!   │    .fpt file    │◄───────────────────────────┘
//!   └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use fptmemo::{MemoReader, RecordType};
//!
//! let mut memo = MemoReader::open("people.fpt")?;
//! let record = memo.lookup(1)?;
//! if record.record_type == Some(RecordType::Memo) {
//!     println!("{}", String::from_utf8_lossy(record.as_bytes().unwrap_or_default()));
//! }
//! memo.close();
//! # Ok::<(), fptmemo::MemoError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod memo;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MemoError, Result};
pub use config::ReaderConfig;
pub use memo::{
    locate, open_for_table, FileHeader, MemoLookup, MemoReader, NullMemoReader, Record,
    RecordType, SharedMemoReader,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fptmemo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
