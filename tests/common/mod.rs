//! Helpers for staging synthetic FPT files in tests

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HEADER_SIZE: usize = 512;

/// In-memory FPT image built block by block
pub struct FptImage {
    pub block_size: u16,
    pub bytes: Vec<u8>,
}

impl FptImage {
    pub fn new(block_size: u16) -> Self {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[6..8].copy_from_slice(&block_size.to_be_bytes());
        let mut image = Self { block_size, bytes };
        image.pad_to_block_boundary();
        image.set_next_free_block();
        image
    }

    /// Append a record at the next free block and return its block index
    pub fn push(&mut self, type_code: u32, data: &[u8]) -> i64 {
        let index = (self.bytes.len() / self.block_size as usize) as i64;
        self.bytes.extend_from_slice(&type_code.to_be_bytes());
        self.bytes.extend_from_slice(&(data.len() as u32).to_be_bytes());
        self.bytes.extend_from_slice(data);
        self.pad_to_block_boundary();
        self.set_next_free_block();
        index
    }

    /// Append a block header declaring `declared_len` bytes followed by only `data`
    pub fn push_truncated(&mut self, type_code: u32, declared_len: u32, data: &[u8]) -> i64 {
        let index = (self.bytes.len() / self.block_size as usize) as i64;
        self.bytes.extend_from_slice(&type_code.to_be_bytes());
        self.bytes.extend_from_slice(&declared_len.to_be_bytes());
        self.bytes.extend_from_slice(data);
        index
    }

    fn pad_to_block_boundary(&mut self) {
        let block = self.block_size as usize;
        if block == 0 {
            return;
        }
        let rem = self.bytes.len() % block;
        if rem != 0 {
            self.bytes.resize(self.bytes.len() + block - rem, 0);
        }
    }

    fn set_next_free_block(&mut self) {
        if self.block_size == 0 {
            return;
        }
        let next = (self.bytes.len() / self.block_size as usize) as u32;
        self.bytes[0..4].copy_from_slice(&next.to_be_bytes());
    }

    pub fn write_to(&self, path: &Path) {
        write_bytes(path, &self.bytes);
    }
}

pub fn setup_temp_memo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.fpt");
    (temp_dir, path)
}

pub fn write_bytes(path: &Path, bytes: &[u8]) {
    let mut file = File::create(path).unwrap();
    file.write_all(bytes).unwrap();
    file.sync_all().unwrap();
}
