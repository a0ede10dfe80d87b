//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate. The program itself is interactive; the flags only shape
//! how the session starts.

use clap::Parser;
use roster_core::storage::Validation;

/// Command-line arguments for the roster CLI tool.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a roster JSON file to load before the prompt starts.
    ///
    /// If not provided, the session starts with an empty roster.
    #[arg(long, short = 'r')]
    pub roster_path: Option<String>,

    /// Accept loaded files without checking their shape first.
    ///
    /// By default, loaded documents are validated against the roster schema
    /// and rejected files leave the current roster unchanged.
    #[arg(long, short = 's', action)]
    pub skip_validation: bool,
}

impl Args {
    /// The validation mode selected by the flags.
    #[must_use]
    pub fn validation(&self) -> Validation {
        if self.skip_validation {
            Validation::Lenient
        } else {
            Validation::Strict
        }
    }
}
