//! Block Header
//!
//! The 8-byte header preceding every memo payload, and the record type codes.

use std::fmt;
use std::io::{ErrorKind, Read};

use bytes::Buf;

use crate::error::Result;
use crate::MemoError;

use super::BLOCK_HEADER_SIZE;

/// Kind of data stored in a memo record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Code 0
    Picture,
    /// Code 1, text memo
    Memo,
    /// Code 2
    Object,
    /// Any other code, kept verbatim
    Unknown(u32),
}

impl RecordType {
    /// Map a raw type code; unrecognized codes become `Unknown`
    pub fn from_code(code: u32) -> Self {
        match code {
            0x0 => RecordType::Picture,
            0x1 => RecordType::Memo,
            0x2 => RecordType::Object,
            other => RecordType::Unknown(other),
        }
    }

    /// The raw code this type was decoded from
    pub fn code(&self) -> u32 {
        match self {
            RecordType::Picture => 0x0,
            RecordType::Memo => 0x1,
            RecordType::Object => 0x2,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RecordType::Unknown(_))
    }
}

impl From<u32> for RecordType {
    fn from(code: u32) -> Self {
        RecordType::from_code(code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::Picture => "picture",
            RecordType::Memo => "memo",
            RecordType::Object => "object",
            RecordType::Unknown(_) => "unknown",
        };
        f.write_str(name)
    }
}

/// Per-record header: raw type code and payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub type_code: u32,
    /// Exact payload byte count, independent of block size
    pub payload_length: u32,
}

impl BlockHeader {
    /// Read a block header from the current stream position
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; BLOCK_HEADER_SIZE as usize];
        reader.read_exact(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => MemoError::Format(format!(
                "block header truncated: expected {} bytes",
                BLOCK_HEADER_SIZE
            )),
            _ => MemoError::Io(e),
        })?;

        let mut cursor = &buf[..];
        Ok(Self {
            type_code: cursor.get_u32(),
            payload_length: cursor.get_u32(),
        })
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from_code(self.type_code)
    }
}
