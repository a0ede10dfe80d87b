//! Roster CLI Library
//!
//! This crate provides the command-line interface for roster, an interactive
//! tool for maintaining a small list of people. It handles argument parsing,
//! the command loop and the interactive prompts.
//!
//! # Key Features
//!
//! - **Command Loop**: A line-oriented prompt dispatching to roster operations
//! - **Closed Command Set**: `add`, `info`, `list`, `load`, `save`, `help`, `exit`
//! - **Interactive Prompts**: Field-by-field input when adding a person
//! - **Pluggable Validation**: Strict schema checking of loaded files by default,
//!   with a flag to accept documents leniently
//!
//! # Examples
//!
//! The CLI binary (`roster`) can be used in several ways:
//!
//! ```bash
//! # Start with an empty roster
//! roster
//!
//! # Preload a roster file before the prompt starts
//! roster --roster-path ~/people.json
//!
//! # Accept loaded files without schema validation
//! roster --skip-validation
//! ```

pub mod cli_args;
pub mod input;
pub mod repl;
