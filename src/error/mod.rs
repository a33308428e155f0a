//! Error types and handling for Implant
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Invalid input directory, exclusion pattern or package name
//! - [`fs`]: Scanning, reading and writing failures
//! - [`encode`]: Compression, decoding, rendering and formatting failures
//!
//! Per-entry stat failures are not errors at all: the inclusion filter
//! absorbs them and simply rejects the entry.

pub mod config;
pub mod encode;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Implant operations
#[derive(Error, Diagnostic, Debug)]
pub enum ImplantError {
    // Configuration errors
    #[error("Invalid input directory '{path}': {reason}")]
    #[diagnostic(
        code(implant::config::invalid_input),
        help("Did you forget to specify a directory to read with --input?")
    )]
    InvalidInput { path: String, reason: String },

    #[error("Invalid exclusion pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(implant::config::invalid_exclude),
        help("The pattern is a regular expression matched against the full path, e.g. '\\.git'")
    )]
    InvalidExcludePattern { pattern: String, reason: String },

    #[error("Invalid package name '{name}'")]
    #[diagnostic(
        code(implant::config::invalid_package),
        help("The package name becomes a Rust module name and must be a valid identifier")
    )]
    InvalidPackage { name: String },

    // Scan errors
    #[error("Failed to scan directory '{path}': {reason}")]
    #[diagnostic(code(implant::scan::failed))]
    ScanFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file '{path}': {reason}")]
    #[diagnostic(code(implant::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(implant::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Encoding errors
    #[error("Failed to compress '{path}': {reason}")]
    #[diagnostic(code(implant::encode::compress_failed))]
    EncodingFailed { path: String, reason: String },

    #[error("Failed to decode resource '{path}': {reason}")]
    #[diagnostic(code(implant::encode::decode_failed))]
    DecodeFailed { path: String, reason: String },

    // Output errors
    #[error("Failed to render template: {reason}")]
    #[diagnostic(code(implant::render::failed))]
    RenderFailed { reason: String },

    #[error("Failed to format generated source: {reason}")]
    #[diagnostic(
        code(implant::format::failed),
        help("Install rustfmt or pass --no-format")
    )]
    FormatFailed { reason: String },
}

impl ImplantError {
    /// Whether this error stems from bad input rather than a failure mid-run.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ImplantError::InvalidInput { .. }
                | ImplantError::InvalidExcludePattern { .. }
                | ImplantError::InvalidPackage { .. }
        )
    }
}

impl From<tera::Error> for ImplantError {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful detail in the source chain
        let mut reason = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            reason.push_str(": ");
            reason.push_str(&inner.to_string());
            source = inner.source();
        }
        ImplantError::RenderFailed { reason }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ImplantError>;
