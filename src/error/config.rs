//! Configuration errors

use super::ImplantError;

/// Creates an invalid input directory error
pub fn invalid_input(path: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::InvalidInput {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid exclusion pattern error
pub fn invalid_exclude(pattern: impl Into<String>, reason: impl Into<String>) -> ImplantError {
    ImplantError::InvalidExcludePattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid package name error
pub fn invalid_package(name: impl Into<String>) -> ImplantError {
    ImplantError::InvalidPackage { name: name.into() }
}
