//! Inclusion filter for discovered paths
//!
//! An entry is admitted when it is a regular file (after following links)
//! and its full path does not match the exclusion pattern.
//!
//! The pattern is tested anywhere in the whole path, not anchored to the file
//! name. A pattern like `.git` therefore also rejects `tgit`, since `.`
//! matches any character. Escape it (`\.git`) or anchor it (`/\.git`) to be
//! precise.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

/// Decide whether `path` belongs in the resource set.
///
/// Never fails: an entry that cannot be stat'ed is rejected so the scan can
/// carry on with its siblings.
pub fn should_include(path: &Path, exclude: Option<&Regex>) -> bool {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Failed to stat file");
            return false;
        }
    };

    if !metadata.is_file() {
        return false;
    }

    if let Some(pattern) = exclude {
        if pattern.is_match(&path.to_string_lossy()) {
            return false;
        }
    }

    true
}
