//! Slabikar CLI library
//!
//! This library provides the command-line interface for the slabikar
//! Czech syllable segmentation engine.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod speech;

pub use error::{CliError, CliResult};
