//! Shape validation for roster documents.
//!
//! The persisted format is a JSON array of objects with string-valued
//! `surname`, `name` and `zodiac` keys and a `birthday` array of at least
//! three string tokens. Validation runs against the raw document before it
//! is deserialized, so a rejected file never replaces the current roster.

use serde_json::Value;

use crate::error::{Error, Result};

const REQUIRED_FIELDS: [&str; 4] = ["surname", "name", "zodiac", "birthday"];
const STRING_FIELDS: [&str; 3] = ["surname", "name", "zodiac"];

/// Minimum number of birthday tokens (day, month, year).
pub const MIN_BIRTHDAY_TOKENS: usize = 3;

/// Checks a parsed JSON document against the roster schema.
///
/// # Errors
///
/// Returns a schema error naming the offending entry and constraint if the
/// document is not an array of well-formed person objects.
pub fn validate_document(document: &Value) -> Result<()> {
    let entries = document
        .as_array()
        .ok_or_else(|| Error::Schema("top-level value must be an array".to_string()))?;

    for (index, entry) in entries.iter().enumerate() {
        validate_entry(index, entry)?;
    }

    Ok(())
}

fn validate_entry(index: usize, entry: &Value) -> Result<()> {
    let object = entry
        .as_object()
        .ok_or_else(|| entry_error(index, "must be an object"))?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(entry_error(
                index,
                &format!("missing required field `{field}`"),
            ));
        }
    }

    for field in STRING_FIELDS {
        if !object[field].is_string() {
            return Err(entry_error(index, &format!("`{field}` must be a string")));
        }
    }

    let birthday = object["birthday"]
        .as_array()
        .ok_or_else(|| entry_error(index, "`birthday` must be an array"))?;

    if birthday.len() < MIN_BIRTHDAY_TOKENS {
        return Err(entry_error(
            index,
            &format!("`birthday` must contain at least {MIN_BIRTHDAY_TOKENS} tokens"),
        ));
    }

    if !birthday.iter().all(Value::is_string) {
        return Err(entry_error(index, "`birthday` tokens must be strings"));
    }

    Ok(())
}

fn entry_error(index: usize, message: &str) -> Error {
    Error::Schema(format!("entry {index}: {message}"))
}
