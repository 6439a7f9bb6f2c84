//! nightwatch — overnight duty roster scheduler.
//!
//! Reads a night window and squad lists, builds the patrol and stove-watch
//! roster, and prints it as JSON.
//!
//! ```text
//! nightwatch [INPUT_FILE]
//! ```
//!
//! With no argument the input is read interactively from stdin: the window
//! line first, then one name per line, blank lines between squads, `END`
//! to finish.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use nw_io::{load_input, parse_input, write_json, RosterInput};
use nw_roster::build_roster;

/// Line that terminates interactive input.
const END_SENTINEL: &str = "END";

fn main() -> Result<()> {
    // 1. Read input: from the file argument, or interactively.
    let input = match env::args().nth(1) {
        Some(path) => load_input(Path::new(&path))?,
        None => read_interactive()?,
    };

    // 2. Build the roster.
    let schedule = build_roster(&input.window, &input.squads)?;

    // 3. Print it.
    let json = nw_io::to_json_pretty(&schedule)?;
    println!("{json}");

    // 4. Optionally save to a file.
    offer_save(&schedule)?;

    Ok(())
}

/// Collect input lines from stdin until the end sentinel, then parse them.
fn read_interactive() -> Result<RosterInput> {
    println!("Night window (e.g. 22:00 to 06:00), then one name per line.");
    println!("Separate squads with a blank line; finish with {END_SENTINEL}.");

    let mut text = String::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == END_SENTINEL {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }

    Ok(parse_input(&text)?)
}

/// Ask whether to save the schedule, and to which file.
fn offer_save(schedule: &nw_core::Schedule) -> Result<()> {
    let answer = prompt("Save the schedule to a file? (y/n): ")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let name = prompt("File name: ")?;
    let name = name.trim();
    if name.is_empty() {
        println!("No file name given; not saved.");
        return Ok(());
    }

    write_json(Path::new(name), schedule)?;
    println!("Saved to {name}.");
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer)
}
