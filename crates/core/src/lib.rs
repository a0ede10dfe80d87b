//! Roster Core Library
//!
//! This crate provides the core functionality for roster, an interactive
//! command-line tool that maintains a small in-memory list of people and
//! persists it to a JSON file.
//!
//! # Key Features
//!
//! - **Record Store**: An in-memory roster kept sorted by parsed birthdate
//! - **Persistence**: Load and save the roster as a pretty-printed JSON array
//! - **Schema Validation**: Optional shape checking of loaded documents
//! - **Table Rendering**: Fixed-width bordered tables for display
//! - **Error Handling**: Distinguishable error kinds for all failure modes
//!
//! # Examples
//!
//! Loading a roster from a file and filtering it by surname:
//!
//! ```no_run
//! use roster_core::roster::Roster;
//! use roster_core::storage::{load_roster, Validation};
//!
//! let people = load_roster("people.json", Validation::Strict)?;
//! let roster = Roster::from_people(people);
//! for person in roster.select("Ivanov") {
//!     println!("{person}");
//! }
//! # Ok::<(), roster_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod person;
pub mod render;
pub mod roster;
pub mod schema;
pub mod storage;
