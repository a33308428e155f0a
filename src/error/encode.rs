//! Encoding and output generation errors

use super::ImplantError;

/// Creates a compression failure error
pub fn compress_failed(path: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::EncodingFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a decode failure error
pub fn decode_failed(path: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::DecodeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a format failure error
pub fn format_failed(reason: impl Into<String>) -> ImplantError {
    ImplantError::FormatFailed {
        reason: reason.into(),
    }
}
