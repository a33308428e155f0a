//! Directory scanning
//!
//! Walks the input directory depth-first. Entries within each directory are
//! visited sorted by file name, so a file comes before a sibling directory
//! whose name sorts after it:
//!
//! ```text
//! data/a.txt
//! data/b.bin
//! data/sub/c.txt
//! ```
//!
//! Symbolic links are not descended into; the inclusion filter decides what
//! they point at.
//!
//! Every discovered path is cleaned lexically before it is filtered or used
//! as a key: `./data/a.txt` becomes `data/a.txt`, and with a root of `.` a
//! file is keyed by its bare name.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::PipelineConfiguration;
use crate::error::{Result, config, fs as fs_error};
use crate::resource::filter::should_include;

/// Check the root exists and is a directory.
///
/// Runs before any traversal so a bad root is reported as a configuration
/// problem rather than a scan failure.
pub fn check_input(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root)
        .map_err(|e| config::invalid_input(root.display().to_string(), e.to_string()))?;

    if !metadata.is_dir() {
        return Err(config::invalid_input(
            root.display().to_string(),
            "not a directory",
        ));
    }

    Ok(())
}

/// Lazily yields admitted file paths beneath a root
pub struct Scanner<'a> {
    config: &'a PipelineConfiguration,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a PipelineConfiguration) -> Self {
        Self { config }
    }

    /// Iterate over admitted paths in traversal order.
    ///
    /// Each call starts a fresh walk. A failure to list a directory is yielded
    /// as a scan error; a caller collecting into a `Result` stops there.
    /// Failures on a single entry only skip that entry.
    pub fn paths(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        let exclude = self.config.exclude.as_ref();

        WalkDir::new(self.config.root())
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) if is_listing_failure(&e) => {
                        let path = e
                            .path()
                            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
                        return Some(Err(fs_error::scan_failed(path, e.to_string())));
                    }
                    Err(e) => {
                        debug!(error = %e, "Skipping unreadable entry");
                        return None;
                    }
                };

                // Directories are only a way to reach their children
                if entry.file_type().is_dir() {
                    return None;
                }

                let path = clean_path(entry.path());
                debug!(path = %path.display(), "Found file");
                if should_include(&path, exclude) {
                    debug!(path = %path.display(), "Including file");
                    Some(Ok(path))
                } else {
                    debug!(path = %path.display(), "Excluding file");
                    None
                }
            })
    }

    /// Check the root, then collect every admitted path.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        check_input(self.config.root())?;
        self.paths().collect()
    }
}

/// Whether a walk error means a directory's children could not be listed.
///
/// Errors without a path come from reading directory entries; errors naming
/// an existing directory come from opening it. Anything else concerns a
/// single entry, typically one that vanished after it was listed.
fn is_listing_failure(err: &walkdir::Error) -> bool {
    match err.path() {
        None => true,
        Some(path) => fs::symlink_metadata(path).is_ok_and(|m| m.is_dir()),
    }
}

/// Lexically simplify a path: drop `.` components, fold `name/..` pairs and
/// return `.` for an empty result.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if depth > 0 => {
                cleaned.pop();
                depth -= 1;
            }
            Component::ParentDir => {
                // `..` above the root of an absolute path stays at the root
                if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            Component::Normal(name) => {
                cleaned.push(name);
                depth += 1;
            }
            Component::Prefix(_) | Component::RootDir => cleaned.push(component.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}
