use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Calendar format used for sorting: day.month.year, e.g. `15.6.1985`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// One roster entry.
///
/// The birthday is stored as the literal text tokens the user entered
/// (day, month, year), not as parsed integers. All fields default to empty
/// so documents with absent keys still load; they render as empty strings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub zodiac: String,
    #[serde(default)]
    pub birthday: Vec<String>,
}

impl Person {
    /// Birthday tokens joined with "." for display and parsing.
    pub fn birthday_text(&self) -> String {
        self.birthday.join(".")
    }

    /// Parses the birthday tokens as a calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined tokens do not form a valid
    /// day.month.year date.
    pub fn birthdate(&self) -> Result<NaiveDate> {
        let text = self.birthday_text();
        NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT)
            .map_err(|e| Error::birthday_error(text, e))
    }
}

impl Display for Person {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} {}", self.surname, self.name)
    }
}
