//! Implant - static resource embedder
//!
//! Reads every file beneath a directory, compresses and hex-encodes it, and
//! writes a Rust module that carries the contents so a program can use them
//! without touching the filesystem at runtime.

use std::process::ExitCode;

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod error;
mod format;
mod logging;
mod pipeline;
mod render;
mod resource;
#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use commands::generate::{self, Generated};

/// Exit status when nothing beneath the input directory was admitted
const EXIT_NOTHING_FOUND: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match generate::run(&cli) {
        Ok(Generated::Written { count, output }) => {
            let green = Style::new().green().bold();
            println!(
                "{} {} resources to {}",
                green.apply_to("Wrote"),
                count,
                output.display()
            );
            ExitCode::SUCCESS
        }
        Ok(Generated::NothingFound { root }) => {
            eprintln!("Failed to find files beneath {}", root.display());
            ExitCode::from(EXIT_NOTHING_FOUND)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_configuration_error() {
                if let Some(help) = e.help() {
                    eprintln!("  help: {}", help);
                }
            }
            ExitCode::FAILURE
        }
    }
}
