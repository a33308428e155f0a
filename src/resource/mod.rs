//! Resource records for embedded files
//!
//! A **resource** is one regular file discovered beneath the input directory.
//! Its bytes are gzip-compressed and hex-encoded so the result can sit inside
//! a quoted string literal in generated source.
//!
//! - [`filter`]: decides whether a path belongs in the resource set
//! - [`scanner`]: walks the input directory in a deterministic order
//! - [`encoder`]: turns a file into a [`ResourceRecord`]

pub mod encoder;
pub mod filter;
pub mod scanner;

use std::io::Read;

use flate2::read::GzDecoder;
use serde::Serialize;

use crate::error::{Result, encode};

/// One embedded file
///
/// Examples:
/// - `data/static.rs.tera`
/// - `assets/css/site.css`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    /// Path as discovered, rooted at the input directory as given
    pub path: String,

    /// Lowercase hex of the gzip-compressed contents
    pub encoded_payload: String,

    /// Size of the uncompressed contents in bytes
    pub original_length: usize,
}

impl ResourceRecord {
    /// Recover the original file contents.
    ///
    /// Fails if the payload is not valid hex, not a gzip stream, or does not
    /// expand to exactly `original_length` bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let compressed = hex::decode(&self.encoded_payload)
            .map_err(|e| encode::decode_failed(&self.path, e.to_string()))?;

        let mut contents = Vec::with_capacity(self.original_length);
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut contents)
            .map_err(|e| encode::decode_failed(&self.path, e.to_string()))?;

        if contents.len() != self.original_length {
            return Err(encode::decode_failed(
                &self.path,
                format!(
                    "expected {} bytes, decoded {}",
                    self.original_length,
                    contents.len()
                ),
            ));
        }

        Ok(contents)
    }
}
