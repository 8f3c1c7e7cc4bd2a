//! Configuration for fptmemo readers
//!
//! Centralized configuration with sensible defaults.

/// Default capacity of the buffered reader wrapped around the memo file
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Options controlling how memo files are opened and addressed
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    // -------------------------------------------------------------------------
    // Addressing
    // -------------------------------------------------------------------------
    /// Reject block offsets that lie past the end of the file before reading.
    ///
    /// When disabled, an out-of-range index surfaces as a failed read of the
    /// block header instead.
    pub bounds_check: bool,

    // -------------------------------------------------------------------------
    // Discovery
    // -------------------------------------------------------------------------
    /// Hand out a `NullMemoReader` when a table has no memo file beside it,
    /// instead of failing with `MissingMemoFile`.
    pub ignore_missing_memo: bool,

    // -------------------------------------------------------------------------
    // I/O
    // -------------------------------------------------------------------------
    /// Capacity (in bytes) of the read buffer around the file handle
    pub buffer_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            bounds_check: false,
            ignore_missing_memo: true,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl ReaderConfig {
    /// Create a new config builder
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for ReaderConfig
#[derive(Default)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Enable or disable the explicit end-of-file check on block offsets
    pub fn bounds_check(mut self, enabled: bool) -> Self {
        self.config.bounds_check = enabled;
        self
    }

    /// Choose whether a missing memo file yields a null reader or an error
    pub fn ignore_missing_memo(mut self, ignore: bool) -> Self {
        self.config.ignore_missing_memo = ignore;
        self
    }

    /// Set the read buffer capacity (in bytes); zero falls back to the default
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.config.buffer_capacity = if bytes == 0 {
            DEFAULT_BUFFER_CAPACITY
        } else {
            bytes
        };
        self
    }

    pub fn build(self) -> ReaderConfig {
        self.config
    }
}
