//! Reading and writing the roster file.
//!
//! The persisted format is a pretty-printed JSON array (4-space indent,
//! non-ASCII characters written literally). Loading optionally validates the
//! document shape before it is accepted, so callers can keep their current
//! roster when a file is rejected.

use std::fs::File;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::person::Person;
use crate::schema;

/// Whether a loaded document is shape-checked before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Accept whatever deserializes; absent fields become empty values.
    Lenient,
    /// Reject documents that do not match the roster schema.
    Strict,
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads a roster from a JSON file.
///
/// The file is read and parsed in full before anything is returned, so an
/// error leaves the caller's roster untouched. With [`Validation::Strict`]
/// the raw document is checked against the roster schema first.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The contents are not valid JSON
/// - Strict validation rejects the document shape
/// - The document does not deserialize into person records
pub fn load_roster(path: &str, validation: Validation) -> Result<Vec<Person>> {
    let reader = get_reader("roster", path)?;

    let document: Value = serde_json::from_reader(reader).map_err(|e| {
        Error::json_error(
            "reading".to_string(),
            "roster".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if validation == Validation::Strict {
        schema::validate_document(&document)?;
    }

    let people: Vec<Person> = serde_json::from_value(document).map_err(|e| {
        Error::json_error(
            "deserializing".to_string(),
            "roster".to_string(),
            path.to_string(),
            e,
        )
    })?;

    debug!("Loaded {} people from `{path}`", people.len());
    Ok(people)
}

/// Saves the roster as a JSON array to `path`.
///
/// Output is UTF-8, indented with 4 spaces, with non-ASCII characters
/// written literally. The file handle is released on all exit paths.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn save_roster(path: &str, people: &[Person]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io_error("roster".to_string(), path.to_string(), e))?;

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(file, formatter);
    people.serialize(&mut serializer).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            "roster".to_string(),
            path.to_string(),
            e,
        )
    })?;

    debug!("Saved {} people to `{path}`", people.len());
    Ok(())
}
