//! Resource collection pipeline
//!
//! This module handles:
//! - Validating the input directory before anything is read
//! - Scanning for admitted files
//! - Encoding every file in scan order
//!
//! A run is all-or-nothing: the first read or encoding failure aborts it and
//! no records are returned. Verbose runs also decode every record once and
//! fail if a payload does not reproduce the file.

use tracing::{debug, info};

use crate::config::PipelineConfiguration;
use crate::error::Result;
use crate::resource::ResourceRecord;
use crate::resource::encoder::encode_file;
use crate::resource::scanner::Scanner;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Records in scan order, never empty
    Resources(Vec<ResourceRecord>),
    /// Nothing beneath the root was admitted
    Empty,
}

impl PipelineOutcome {
    /// Records collected, empty for [`PipelineOutcome::Empty`]
    #[cfg(test)]
    pub fn records(&self) -> &[ResourceRecord] {
        match self {
            PipelineOutcome::Resources(records) => records,
            PipelineOutcome::Empty => &[],
        }
    }
}

/// Orchestrates scanner and encoder over one root directory
pub struct ResourcePipeline<'a> {
    config: &'a PipelineConfiguration,
}

impl<'a> ResourcePipeline<'a> {
    pub fn new(config: &'a PipelineConfiguration) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<PipelineOutcome> {
        let root = self.config.root();
        debug!(root = %root.display(), "Reading input directory");

        let paths = Scanner::new(self.config).scan()?;
        if paths.is_empty() {
            return Ok(PipelineOutcome::Empty);
        }

        let records = paths
            .iter()
            .map(|path| encode_file(path))
            .collect::<Result<Vec<_>>>()?;

        if self.config.verbose {
            info!("Collected {} resources", records.len());
            for record in &records {
                record.decode()?;
                info!(
                    length = record.original_length,
                    encoded = record.encoded_payload.len(),
                    "\t{}",
                    record.path
                );
            }
        }

        Ok(PipelineOutcome::Resources(records))
    }
}
