//! Memo File Header
//!
//! Decodes the fixed 512-byte header at the start of every FPT file.

use std::io::Read;

use bytes::Buf;

use crate::error::Result;
use crate::MemoError;

use super::{HEADER_SIZE, RESERVED2_SIZE};

/// Parsed memo file header, immutable for the lifetime of a reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Index of the next unused block (informational only)
    pub next_free_block: u32,
    /// Opaque, not interpreted
    pub reserved1: u16,
    /// Size in bytes of one addressing unit
    pub block_size: u16,
    /// Opaque, not interpreted
    pub reserved2: [u8; RESERVED2_SIZE],
}

impl FileHeader {
    /// Read and decode a header from a stream positioned at offset 0.
    ///
    /// Consumes exactly `HEADER_SIZE` bytes on success.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        let found = reader
            .take(HEADER_SIZE as u64)
            .read_to_end(&mut buf)?;

        if found < HEADER_SIZE {
            return Err(MemoError::Format(format!(
                "memo header truncated: expected {} bytes, found {}",
                HEADER_SIZE, found
            )));
        }

        Ok(Self::decode(&buf))
    }

    /// Decode a header from a buffer of at least `HEADER_SIZE` bytes
    fn decode(mut buf: &[u8]) -> Self {
        // Big-endian: u32 next_free_block | u16 reserved1 | u16 block_size | 504 bytes
        let next_free_block = buf.get_u32();
        let reserved1 = buf.get_u16();
        let block_size = buf.get_u16();
        let mut reserved2 = [0u8; RESERVED2_SIZE];
        buf.copy_to_slice(&mut reserved2);

        Self {
            next_free_block,
            reserved1,
            block_size,
            reserved2,
        }
    }

    /// Byte offset of the first byte past the last allocated block
    pub fn allocated_len(&self) -> u64 {
        u64::from(self.next_free_block) * u64::from(self.block_size)
    }
}
