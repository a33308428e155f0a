//! Test fixtures for building input trees.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_tree};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     write_tree(temp.path(), &[("a.txt", b"hi"), ("sub/c.txt", b"x")]);
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Directory to create temp dirs in.
///
/// Never relative, so a `TMPDIR=tmp` environment cannot put fixtures under
/// the current working directory.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else if cfg!(windows) {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Write `files` beneath `root`, creating parent directories as needed.
///
/// # Panics
///
/// Panics if any directory or file cannot be written.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
    }
}
