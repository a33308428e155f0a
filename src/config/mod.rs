//! Run configuration
//!
//! Two values govern one invocation:
//! - [`PipelineConfiguration`]: what to collect (root, exclusion pattern, verbosity)
//! - [`OutputConfiguration`]: where and how the generated source is written
//!
//! Both are built from command-line arguments and passed explicitly to the
//! components that need them.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Result, config};

/// Inputs governing one resource collection run
#[derive(Debug, Clone)]
pub struct PipelineConfiguration {
    /// Directory to scan
    pub root: PathBuf,
    /// Paths matching this expression anywhere are excluded
    pub exclude: Option<Regex>,
    /// Emit a listing of the collected resources
    pub verbose: bool,
}

impl PipelineConfiguration {
    /// Build a configuration, compiling the exclusion pattern.
    ///
    /// An empty pattern means nothing is excluded.
    pub fn new(root: impl Into<PathBuf>, exclude: Option<&str>, verbose: bool) -> Result<Self> {
        let exclude = match exclude {
            Some(pattern) if !pattern.is_empty() => Some(
                Regex::new(pattern).map_err(|e| config::invalid_exclude(pattern, e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            root: root.into(),
            exclude,
            verbose,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Where and how generated source is written
#[derive(Debug, Clone)]
pub struct OutputConfiguration {
    pub output: PathBuf,
    /// Module name the generated resources live under
    pub package: String,
    /// Pipe the generated source through rustfmt
    pub format: bool,
}

impl OutputConfiguration {
    pub fn new(output: impl Into<PathBuf>, package: impl Into<String>, format: bool) -> Result<Self> {
        let package = package.into();
        if !is_identifier(&package) {
            return Err(config::invalid_package(package));
        }

        Ok(Self {
            output: output.into(),
            package,
            format,
        })
    }
}

/// Strict and reserved keywords that cannot name a module
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_identifier(name: &str) -> bool {
    if name == "_" || name == "Self" || KEYWORDS.contains(&name) {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImplantError;

    #[test]
    fn test_empty_pattern_excludes_nothing() {
        let config = PipelineConfiguration::new("data", Some(""), false).unwrap();
        assert!(config.exclude.is_none());

        let config = PipelineConfiguration::new("data", None, false).unwrap();
        assert!(config.exclude.is_none());
    }

    #[test]
    fn test_pattern_is_compiled() {
        let config = PipelineConfiguration::new("data", Some(r"\.bin$"), true).unwrap();
        let regex = config.exclude.unwrap();
        assert!(regex.is_match("data/b.bin"));
        assert!(!regex.is_match("data/a.txt"));
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let err = PipelineConfiguration::new("data", Some("(unclosed"), false).unwrap_err();
        assert!(matches!(err, ImplantError::InvalidExcludePattern { .. }));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_package_must_be_identifier() {
        assert!(OutputConfiguration::new("static.rs", "resources", true).is_ok());
        assert!(OutputConfiguration::new("static.rs", "_assets2", true).is_ok());

        for bad in ["", "_", "1st", "my-assets", "a b", "mod", "self"] {
            let err = OutputConfiguration::new("static.rs", bad, true).unwrap_err();
            assert!(matches!(err, ImplantError::InvalidPackage { .. }), "{bad}");
        }
    }
}
