//! Optional formatting of generated source
//!
//! Formatting is cosmetic: when the formatter is missing or fails, the
//! unformatted text is written instead.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{Result, encode};

/// Anything that can reformat source text
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String>;
}

/// Pipes source through the `rustfmt` binary
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: String,
    edition: String,
}

impl Default for Rustfmt {
    fn default() -> Self {
        Self {
            program: "rustfmt".to_string(),
            edition: "2024".to_string(),
        }
    }
}

impl Rustfmt {
    /// Use a specific rustfmt executable
    #[cfg(test)]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

impl Formatter for Rustfmt {
    fn format(&self, source: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .arg("--edition")
            .arg(&self.edition)
            .arg("--emit")
            .arg("stdout")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| encode::format_failed(format!("failed to spawn {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| encode::format_failed(format!("failed to write to stdin: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| encode::format_failed(format!("failed to wait for {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(encode::format_failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| encode::format_failed(format!("invalid UTF-8 output: {e}")))
    }
}

/// Format `source`, falling back to the original text on failure.
pub fn format_or_passthrough(formatter: &dyn Formatter, source: String) -> String {
    match formatter.format(&source) {
        Ok(formatted) => {
            debug!("Formatted generated source");
            formatted
        }
        Err(e) => {
            warn!("{e}; writing unformatted output");
            source
        }
    }
}
