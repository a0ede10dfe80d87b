//! Interactive prompts for the `add` and `info` commands.

use std::io::{stdin, stdout, Write};

use roster_core::error::Result;
use roster_core::person::Person;

/// Prompts for one line of input and returns it trimmed.
///
/// Empty input is accepted; the roster does not enforce non-empty fields.
pub fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    stdout().flush()?;

    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Collects the four person fields interactively.
///
/// The birthday is entered as one line in `day.month.year` form and stored
/// as its literal text tokens.
pub fn prompt_person() -> Result<Person> {
    let surname = prompt("Surname")?;
    let name = prompt("Name")?;
    let zodiac = prompt("Zodiac sign")?;
    let birthday = prompt("Birthday (day.month.year)")?
        .split('.')
        .map(ToString::to_string)
        .collect();

    Ok(Person {
        surname,
        name,
        zodiac,
        birthday,
    })
}

/// Prompts for the surname to look up.
pub fn prompt_surname() -> Result<String> {
    prompt("Surname")
}
