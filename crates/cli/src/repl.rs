//! The interactive command loop.
//!
//! One line is read per iteration. The first whitespace-delimited token
//! selects a command; `load` and `save` take the rest of the line as a file
//! path. Errors are reported on stderr and the loop continues; only `exit`
//! (or end of input) terminates it.

use std::io::{stdin, stdout, Write};

use log::{debug, info};
use roster_core::config::expand_path;
use roster_core::error::{Error, Result};
use roster_core::person::Person;
use roster_core::render::render_table;
use roster_core::roster::Roster;
use roster_core::storage::{load_roster, save_roster, Validation};

use crate::cli_args::Args;
use crate::input;

const COMMAND_PROMPT: &str = "Enter command (add, info, list, load, save, exit, help): ";

/// One parsed input line.
///
/// The command set is closed: adding a command means adding a variant here
/// and a match arm in the dispatcher, both checked at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Info,
    List,
    Load(String),
    Save(String),
    Help,
    Exit,
}

impl Command {
    /// Parses one input line into a command.
    ///
    /// Only the leading keyword is lowercased; a path argument is kept
    /// verbatim so file names with capitals survive.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is unknown, or if `load`/`save` is
    /// given without a path argument.
    pub fn parse(line: &str) -> Result<Command> {
        let trimmed = line.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let keyword = parts.next().unwrap_or("").to_lowercase();
        let argument = parts
            .next()
            .map(str::trim)
            .filter(|argument| !argument.is_empty())
            .map(ToString::to_string);

        match keyword.as_str() {
            "add" => Ok(Command::Add),
            "info" => Ok(Command::Info),
            "list" => Ok(Command::List),
            "load" => argument
                .map(Command::Load)
                .ok_or_else(|| Error::MissingArgument("load".to_string())),
            "save" => argument
                .map(Command::Save)
                .ok_or_else(|| Error::MissingArgument("save".to_string())),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            _ => Err(Error::UnknownCommand(keyword)),
        }
    }
}

/// Runs the command loop until `exit` or end of input.
///
/// # Errors
///
/// Returns an error only for console-level I/O failures or when the
/// roster file requested with `--roster-path` cannot be loaded; every
/// per-command error is reported and the loop continues.
pub fn run(args: &Args) -> Result<()> {
    let validation = args.validation();
    let mut roster = Roster::new();

    if let Some(path) = &args.roster_path {
        let path = expand_path(path);
        roster.replace(load_roster(&path, validation)?);
        info!("Preloaded {} people from `{path}`", roster.len());
    }

    loop {
        print!("{COMMAND_PROMPT}");
        stdout().flush()?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            // End of input behaves like `exit`.
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        debug!("Dispatching {command:?}");
        match command {
            Command::Exit => break,
            Command::Add => {
                let person = input::prompt_person()?;
                if let Err(e) = roster.add(person) {
                    eprintln!("{e}");
                }
            }
            Command::Info => {
                let surname = input::prompt_surname()?;
                let matches: Vec<Person> =
                    roster.select(&surname).into_iter().cloned().collect();
                println!("{}", render_table(&matches));
            }
            Command::List => {
                println!("{}", render_table(roster.people()));
            }
            Command::Load(path) => {
                let path = expand_path(&path);
                match load_roster(&path, validation) {
                    Ok(people) => roster.replace(people),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Command::Save(path) => {
                let path = expand_path(&path);
                if let Err(e) = save_roster(&path, roster.people()) {
                    eprintln!("{e}");
                }
            }
            Command::Help => print_help(),
        }
    }

    Ok(())
}

fn print_help() {
    println!("add         - add a new person and re-sort by birthdate");
    println!("info        - show people with a given surname");
    println!("list        - show all people");
    println!("load <path> - load the roster from a JSON file");
    println!("save <path> - save the roster to a JSON file");
    println!("help        - show this summary");
    println!("exit        - quit");
}
