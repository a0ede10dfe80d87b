//! Path utilities for user-supplied file names.
//!
//! This module expands shell variables like `~` in the paths given to the
//! `load` and `save` commands and to the startup roster option.

/// Expands shell variables in a user-supplied path.
///
/// # Examples
///
/// ```
/// use roster_core::config::expand_path;
///
/// let expanded = expand_path("~/people.json");
/// assert!(!expanded.starts_with('~'));
/// ```
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
