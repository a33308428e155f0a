//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// Implant - embed static resources in Rust source
///
/// Reads every file beneath a directory and writes a Rust module holding
/// their compressed contents.
#[derive(Parser, Debug)]
#[command(
    name = "implant",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Embed a directory of static resources into a generated Rust source file",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  implant --input data/ --output src/static.rs      \x1b[90m# Embed everything under data/\x1b[0m\n   \
                  implant --exclude '/\\.git' --package assets      \x1b[90m# Skip git metadata\x1b[0m\n   \
                  implant --no-format -v                             \x1b[90m# Skip rustfmt, list files\x1b[0m\n"
)]
pub struct Cli {
    /// The directory to read from
    #[arg(long, short = 'i', default_value = "data/", env = "IMPLANT_INPUT")]
    pub input: PathBuf,

    /// The output file to generate
    #[arg(long, short = 'o', default_value = "static.rs")]
    pub output: PathBuf,

    /// A regular expression of files to ignore, for example '/\.git'
    #[arg(long, short = 'e', default_value = "")]
    pub exclude: String,

    /// The module the generated resources are placed in
    #[arg(long, short = 'p', default_value = "resources")]
    pub package: String,

    /// Pipe the generated source through rustfmt (the default)
    #[arg(long, overrides_with = "no_format")]
    pub format: bool,

    /// Write the generated source without formatting it
    #[arg(long, overrides_with = "format")]
    pub no_format: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Whether the generated source should be formatted
    pub fn should_format(&self) -> bool {
        !self.no_format
    }
}
