//! Command implementations for Implant CLI

pub mod generate;
