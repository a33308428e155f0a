//! Resource encoding
//!
//! Reads a whole file, gzips it at the fastest level and hex-encodes the
//! compressed stream. The gzip header carries no timestamp or file name, so
//! identical input always yields an identical payload.

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::error::{Result, encode, fs as fs_error};
use crate::resource::ResourceRecord;

/// Read and encode the file at `path`.
pub fn encode_file(path: &Path) -> Result<ResourceRecord> {
    let display = path.to_string_lossy();
    let contents =
        fs::read(path).map_err(|e| fs_error::read_failed(display.as_ref(), e.to_string()))?;

    encode_bytes(display.as_ref(), &contents)
}

/// Encode `contents` under the lookup key `path`.
pub fn encode_bytes(path: &str, contents: &[u8]) -> Result<ResourceRecord> {
    let compressed = compress(contents).map_err(|e| encode::compress_failed(path, e.to_string()))?;

    Ok(ResourceRecord {
        path: path.to_string(),
        encoded_payload: hex::encode(compressed),
        original_length: contents.len(),
    })
}

fn compress(contents: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(contents)?;
    encoder.finish()
}
