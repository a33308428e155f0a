//! Generate command
//!
//! Collects resources, renders them and writes the output file. The output
//! is written to a temporary file next to the destination and renamed into
//! place, so a failed run leaves any previous output untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{OutputConfiguration, PipelineConfiguration};
use crate::error::{ImplantError, Result, fs as fs_error};
use crate::format::{Formatter, Rustfmt, format_or_passthrough};
use crate::pipeline::{PipelineOutcome, ResourcePipeline};
use crate::render::Renderer;

/// What a successful run produced
#[derive(Debug, PartialEq, Eq)]
pub enum Generated {
    /// Output written with this many resources
    Written { count: usize, output: PathBuf },
    /// No files were admitted; nothing was written
    NothingFound { root: PathBuf },
}

/// Run generate command
pub fn run(args: &Cli) -> Result<Generated> {
    run_with_formatter(args, &Rustfmt::default())
}

/// Run generate command with a specific formatter
pub fn run_with_formatter(args: &Cli, formatter: &dyn Formatter) -> Result<Generated> {
    let exclude = Some(args.exclude.as_str());
    let pipeline_config = PipelineConfiguration::new(&args.input, exclude, args.verbose)?;
    let output_config =
        OutputConfiguration::new(&args.output, &args.package, args.should_format())?;

    let records = match ResourcePipeline::new(&pipeline_config).run()? {
        PipelineOutcome::Resources(records) => records,
        PipelineOutcome::Empty => {
            return Ok(Generated::NothingFound {
                root: pipeline_config.root,
            });
        }
    };

    let mut source = Renderer::new()?.render(&records, &output_config.package)?;

    if output_config.format {
        debug!(output = %output_config.output.display(), "Formatting generated source");
        source = format_or_passthrough(formatter, source);
    }

    write_atomically(&output_config.output, source.as_bytes())?;

    Ok(Generated::Written {
        count: records.len(),
        output: output_config.output,
    })
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| write_failed(path, &e))?;
    file.write_all(contents).map_err(|e| write_failed(path, &e))?;
    file.persist(path).map_err(|e| write_failed(path, &e.error))?;

    Ok(())
}

fn write_failed(path: &Path, err: &std::io::Error) -> ImplantError {
    fs_error::write_failed(path.display().to_string(), err.to_string())
}
