//! File system errors

use super::ImplantError;

/// Creates a scan failed error
pub fn scan_failed(path: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::ScanFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
