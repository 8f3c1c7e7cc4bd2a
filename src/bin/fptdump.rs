//! fptdump
//!
//! Prints the header of an FPT memo file and the records at chosen blocks.

use clap::Parser;
use fptmemo::{MemoReader, ReaderConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// FPT memo file inspector
#[derive(Parser, Debug)]
#[command(name = "fptdump")]
#[command(about = "Inspect FPT memo files")]
#[command(version)]
struct Args {
    /// Path to the .fpt file
    path: String,

    /// Block indices to look up
    #[arg(allow_negative_numbers = true)]
    indices: Vec<i64>,

    /// Reject indices that point past the end of the file before reading
    #[arg(short, long)]
    bounds_check: bool,

    /// Number of payload bytes to preview per record
    #[arg(short, long, default_value = "64")]
    preview: usize,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fptmemo=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("fptdump v{}", fptmemo::VERSION);

    let config = ReaderConfig::builder()
        .bounds_check(args.bounds_check)
        .build();

    let mut reader = match MemoReader::open_with_config(&args.path, &config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to open memo file: {}", e);
            std::process::exit(1);
        }
    };

    let header = reader.header();
    println!("File:            {}", args.path);
    println!("Block size:      {}", header.block_size);
    println!("Next free block: {}", header.next_free_block);
    println!("Allocated bytes: {}", header.allocated_len());

    let mut failures = 0usize;
    for index in args.indices {
        match reader.lookup(index) {
            Ok(record) => {
                let data = record.as_bytes().unwrap_or_default();
                let kind = record
                    .record_type
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "none".to_string());
                let shown = &data[..data.len().min(args.preview)];
                println!(
                    "[{}] {} ({} bytes): {:?}",
                    index,
                    kind,
                    data.len(),
                    String::from_utf8_lossy(shown)
                );
            }
            Err(e) => {
                failures += 1;
                tracing::warn!("Lookup of block {} failed: {}", index, e);
            }
        }
    }

    reader.close();

    if failures > 0 {
        std::process::exit(2);
    }
}
