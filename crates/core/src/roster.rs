//! The in-memory record store for a session.
//!
//! The roster owns the working set of [`Person`] records. It is kept sorted
//! ascending by parsed birthdate after every insert, so `list` always shows
//! people oldest-first.

use chrono::NaiveDate;
use log::debug;

use crate::error::Result;
use crate::person::Person;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Inserts a person and re-sorts the roster ascending by birthdate.
    ///
    /// Every record's birthday, existing and new, is parsed before any
    /// mutation so that a malformed record cannot leave the roster
    /// half-sorted: on failure the roster is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a birthday error if any record in the roster (including
    /// records accepted by an earlier lenient `load`) does not parse as
    /// day.month.year.
    pub fn add(&mut self, person: Person) -> Result<()> {
        person.birthdate()?;
        for existing in &self.people {
            existing.birthdate()?;
        }

        debug!("Adding {person} to roster of {}", self.people.len());
        self.people.push(person);
        // Every key was parsed above, so the fallback is unreachable.
        self.people
            .sort_by_cached_key(|p| p.birthdate().unwrap_or(NaiveDate::MIN));
        Ok(())
    }

    /// Returns the records whose surname exactly equals `surname`.
    ///
    /// The match is case-sensitive and untrimmed; matches keep roster
    /// order. An empty result is not an error.
    #[must_use]
    pub fn select(&self, surname: &str) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| person.surname == surname)
            .collect()
    }

    /// The full sequence of records in current order.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Replaces the working set wholesale, as after a `load`.
    pub fn replace(&mut self, people: Vec<Person>) {
        self.people = people;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn person(surname: &str, birthday: &[&str]) -> Person {
        Person {
            surname: surname.to_string(),
            name: "Test".to_string(),
            zodiac: "Leo".to_string(),
            birthday: birthday.iter().map(ToString::to_string).collect(),
        }
    }

    fn birthdays(roster: &Roster) -> Vec<String> {
        roster.people().iter().map(Person::birthday_text).collect()
    }

    #[test]
    fn test_add_keeps_roster_sorted_by_birthdate() {
        let mut roster = Roster::new();
        roster.add(person("Ivanov", &["1", "1", "1990"])).unwrap();
        roster.add(person("Petrov", &["15", "6", "1985"])).unwrap();
        roster.add(person("Sidorov", &["31", "12", "1987"])).unwrap();

        assert_eq!(birthdays(&roster), vec!["15.6.1985", "31.12.1987", "1.1.1990"]);
    }

    #[test]
    fn test_add_sorts_within_same_year() {
        let mut roster = Roster::new();
        roster.add(person("A", &["2", "3", "1990"])).unwrap();
        roster.add(person("B", &["1", "3", "1990"])).unwrap();
        roster.add(person("C", &["28", "2", "1990"])).unwrap();

        assert_eq!(birthdays(&roster), vec!["28.2.1990", "1.3.1990", "2.3.1990"]);
    }

    #[test]
    fn test_add_after_load_orders_older_person_first() {
        // Scenario: a loaded 1990 record followed by adding someone born in
        // 1985 must put the 1985 person first.
        let mut roster = Roster::from_people(vec![person("Ivanov", &["1", "1", "1990"])]);
        roster.add(person("Petrov", &["15", "6", "1985"])).unwrap();

        assert_eq!(roster.people()[0].surname, "Petrov");
        assert_eq!(roster.people()[1].surname, "Ivanov");
    }

    #[test]
    fn test_add_rejects_malformed_birthday() {
        let mut roster = Roster::new();
        let result = roster.add(person("Ivanov", &["not", "a", "date"]));
        assert!(matches!(result, Err(Error::Birthday { .. })));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_add_fails_on_previously_loaded_malformed_record() {
        // A lenient load can admit records with short birthdays; the next
        // add must surface that instead of panicking mid-sort.
        let loaded = vec![person("Broken", &["1", "1990"])];
        let mut roster = Roster::from_people(loaded.clone());

        let result = roster.add(person("Ivanov", &["1", "1", "1990"]));
        assert!(matches!(result, Err(Error::Birthday { .. })));
        // Roster unchanged, not half-mutated.
        assert_eq!(roster.people(), loaded.as_slice());
    }

    #[test]
    fn test_select_exact_match_only() {
        let mut roster = Roster::new();
        roster.add(person("Ivanov", &["1", "1", "1990"])).unwrap();
        roster.add(person("Ivanova", &["2", "1", "1991"])).unwrap();
        roster.add(person("Ivanov", &["3", "1", "1992"])).unwrap();

        let matches = roster.select("Ivanov");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|p| p.surname == "Ivanov"));
    }

    #[test]
    fn test_select_is_case_sensitive() {
        let mut roster = Roster::new();
        roster.add(person("Ivanov", &["1", "1", "1990"])).unwrap();

        assert!(roster.select("ivanov").is_empty());
        assert!(roster.select("IVANOV").is_empty());
    }

    #[test]
    fn test_select_does_not_trim() {
        let mut roster = Roster::new();
        roster.add(person("Ivanov", &["1", "1", "1990"])).unwrap();

        assert!(roster.select(" Ivanov").is_empty());
    }

    #[test]
    fn test_select_missing_surname_is_empty_not_error() {
        let roster = Roster::new();
        assert!(roster.select("Nobody").is_empty());
    }

    #[test]
    fn test_select_preserves_store_order() {
        let mut roster = Roster::new();
        roster.add(person("Ivanov", &["1", "1", "1995"])).unwrap();
        roster.add(person("Ivanov", &["1", "1", "1985"])).unwrap();

        let matches = roster.select("Ivanov");
        assert_eq!(matches[0].birthday_text(), "1.1.1985");
        assert_eq!(matches[1].birthday_text(), "1.1.1995");
    }

    #[test]
    fn test_duplicates_are_permitted() {
        let mut roster = Roster::new();
        let p = person("Ivanov", &["1", "1", "1990"]);
        roster.add(p.clone()).unwrap();
        roster.add(p).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_replace_swaps_working_set() {
        let mut roster = Roster::from_people(vec![person("Old", &["1", "1", "1990"])]);
        roster.replace(vec![person("New", &["2", "2", "1992"])]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.people()[0].surname, "New");
    }
}
