//! Fixed-width table rendering for roster listings.

use crate::person::Person;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_PLACEHOLDER: &str = "list is empty";

const INDEX_WIDTH: usize = 4;
const SURNAME_WIDTH: usize = 30;
const NAME_WIDTH: usize = 30;
const ZODIAC_WIDTH: usize = 20;
const BIRTHDAY_WIDTH: usize = 20;

/// Renders a bordered table of people, one row per record.
///
/// Columns: 1-based index (right-aligned), surname, name, zodiac sign
/// (left-aligned) and the birthday tokens joined with "." (right-aligned).
/// An empty sequence renders as the [`EMPTY_PLACEHOLDER`] line with no
/// border or header.
#[must_use]
pub fn render_table(people: &[Person]) -> String {
    if people.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let border = format!(
        "+-{}-+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(SURNAME_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(ZODIAC_WIDTH),
        "-".repeat(BIRTHDAY_WIDTH),
    );

    let header = format!(
        "| {:^INDEX_WIDTH$} | {:^SURNAME_WIDTH$} | {:^NAME_WIDTH$} | {:^ZODIAC_WIDTH$} | {:^BIRTHDAY_WIDTH$} |",
        "#", "Surname", "Name", "Zodiac sign", "Birthday",
    );

    let mut lines = vec![border.clone(), header, border.clone()];

    for (index, person) in people.iter().enumerate() {
        lines.push(format!(
            "| {:>INDEX_WIDTH$} | {:<SURNAME_WIDTH$} | {:<NAME_WIDTH$} | {:<ZODIAC_WIDTH$} | {:>BIRTHDAY_WIDTH$} |",
            index + 1,
            person.surname,
            person.name,
            person.zodiac,
            person.birthday_text(),
        ));
    }

    lines.push(border);
    lines.join("\n")
}
