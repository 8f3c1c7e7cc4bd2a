//! Memo Reader
//!
//! Opens an FPT file and serves random-access lookups by block index.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::MemoError;

use super::{BlockHeader, FileHeader, MemoLookup, Record, BLOCK_HEADER_SIZE, HEADER_SIZE};

/// File-backed memo reader.
///
/// Every lookup seeks the shared handle and reads, so lookups need `&mut self`.
/// Use [`SharedMemoReader`](super::SharedMemoReader) to share one across threads.
///
/// The handle is released by [`close`](Self::close) or when the reader is
/// dropped, whichever comes first.
pub struct MemoReader<R = BufReader<File>> {
    /// `None` once closed
    source: Option<R>,
    header: FileHeader,
    /// Set when opened from a path
    path: Option<PathBuf>,
    bounds_check: bool,
}

impl MemoReader {
    /// Open a memo file with the default configuration
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, &ReaderConfig::default())
    }

    /// Open a memo file and parse its header
    pub fn open_with_config(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Self> {
        let path = path.as_ref();
        let resource_error = |source: io::Error| MemoError::Resource {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(resource_error)?;
        let metadata = file.metadata().map_err(resource_error)?;
        if !metadata.is_file() {
            return Err(resource_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let source = BufReader::with_capacity(config.buffer_capacity, file);
        let mut reader = Self::from_reader(source, config)?;
        reader.path = Some(path.to_path_buf());

        tracing::debug!(
            "Opened memo file {}: block size {}, next free block {}",
            path.display(),
            reader.header.block_size,
            reader.header.next_free_block
        );

        Ok(reader)
    }
}

impl<R: Read + Seek> MemoReader<R> {
    /// Build a reader over any seekable source, parsing the header at offset 0
    pub fn from_reader(mut source: R, config: &ReaderConfig) -> Result<Self> {
        source.seek(SeekFrom::Start(0))?;
        let header = FileHeader::parse(&mut source)?;

        if header.block_size == 0 {
            tracing::warn!("Memo file declares a block size of 0; lookups will fail");
        }

        Ok(Self {
            source: Some(source),
            header,
            path: None,
            bounds_check: config.bounds_check,
        })
    }

    /// Read the record starting at block `index`.
    ///
    /// When the block size is smaller than the file header, low indices
    /// point inside the header and its bytes are decoded as a record. With
    /// bounds checking on, such offsets are rejected instead.
    ///
    /// Fails with:
    /// - `Addressing` if `index <= 0` (no I/O is attempted), if the offset
    ///   does not fit a signed 64-bit seek or the source refuses to seek
    ///   there, or, with bounds checking on, if it lies inside the file header
    ///   or past the end of the file
    /// - `Format` if the block size is 0 or the block header is cut short
    /// - `Truncated` if fewer than the declared number of payload bytes remain
    /// - `Closed` if the handle has been released
    pub fn lookup(&mut self, index: i64) -> Result<Record> {
        if index <= 0 {
            return Err(MemoError::addressing(
                index,
                "block 0 holds the file header, memo indices start at 1",
            ));
        }

        let offset = self.block_offset(index)?;
        let bounds_check = self.bounds_check;
        let source = self.source.as_mut().ok_or(MemoError::Closed)?;

        if bounds_check {
            if offset < HEADER_SIZE as u64 {
                return Err(MemoError::addressing(
                    index,
                    format!("offset {} lies inside the {}-byte file header", offset, HEADER_SIZE),
                ));
            }
            let file_len = source.seek(SeekFrom::End(0))?;
            let header_end = offset.checked_add(BLOCK_HEADER_SIZE);
            if header_end.map_or(true, |end| end > file_len) {
                return Err(MemoError::addressing(
                    index,
                    format!("offset {} lies beyond end of file ({} bytes)", offset, file_len),
                ));
            }
        }

        source
            .seek(SeekFrom::Start(offset))
            .map_err(|e| match e.kind() {
                io::ErrorKind::InvalidInput => MemoError::addressing(
                    index,
                    format!("offset {} cannot be seeked to: {}", offset, e),
                ),
                _ => MemoError::Io(e),
            })?;
        let block = BlockHeader::read(source)?;

        let expected = u64::from(block.payload_length);
        let mut data = Vec::new();
        let found = (&mut *source).take(expected).read_to_end(&mut data)? as u64;
        if found != expected {
            return Err(MemoError::Truncated {
                index,
                expected: block.payload_length,
                found,
            });
        }

        let record_type = block.record_type();
        tracing::trace!(
            "Memo lookup: block {} at offset {} -> {} ({} bytes)",
            index,
            offset,
            record_type,
            found
        );

        Ok(Record::new(record_type, Bytes::from(data)))
    }

    /// Byte offset of block `index`
    fn block_offset(&self, index: i64) -> Result<u64> {
        let block_size = u64::from(self.header.block_size);
        if block_size == 0 {
            return Err(MemoError::Format(
                "block size is 0, records cannot be addressed".to_string(),
            ));
        }

        u64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(block_size))
            .filter(|&offset| i64::try_from(offset).is_ok())
            .ok_or_else(|| MemoError::addressing(index, "block offset overflows"))
    }

    /// Release the underlying handle. Safe to call more than once.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            match &self.path {
                Some(path) => tracing::debug!("Closed memo file {}", path.display()),
                None => tracing::debug!("Closed memo reader"),
            }
        }
    }
}

impl<R> MemoReader<R> {
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn block_size(&self) -> u16 {
        self.header.block_size
    }

    /// Path the reader was opened from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }
}

impl<R: Read + Seek> MemoLookup for MemoReader<R> {
    fn lookup(&mut self, index: i64) -> Result<Record> {
        MemoReader::lookup(self, index)
    }
}
