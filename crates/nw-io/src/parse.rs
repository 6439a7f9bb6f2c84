//! Roster input parsing.
//!
//! The input format is plain text:
//!
//! ```text
//! 22:00 to 06:00
//! Ivanov
//! Petrov (Driver)
//! Sidorov
//!
//! Smirnov
//! Kuznetsov
//! Popov
//! ```
//!
//! The first line is the night window; the remaining lines are soldier
//! names, one per line, with squads separated by blank lines.  A name
//! containing the [`DRIVER_MARKER`] marks a driver; the marker stays part
//! of the name as written.

use std::fs;
use std::path::Path;

use nw_core::{Soldier, Squad, TimeWindow};

use crate::error::{IoError, IoResult};

/// Substring that flags a soldier as a driver.
pub const DRIVER_MARKER: &str = "(Driver)";

/// Parsed roster input: the night window plus the squads in file order.
#[derive(Clone, Debug)]
pub struct RosterInput {
    pub window: TimeWindow,
    pub squads: Vec<Squad>,
}

/// Parse roster input from text.
///
/// Leading and trailing blank lines are ignored; runs of blank lines count
/// as a single squad separator.
pub fn parse_input(text: &str) -> IoResult<RosterInput> {
    let mut lines = text.trim().lines().map(str::trim);

    let window_line = lines
        .next()
        .ok_or_else(|| IoError::Input("input is empty; expected a time window line".into()))?;
    let window: TimeWindow = window_line.parse()?;

    let mut squads = Vec::new();
    let mut members = Vec::new();
    for line in lines {
        if line.is_empty() {
            if !members.is_empty() {
                squads.push(Squad::new(std::mem::take(&mut members)));
            }
            continue;
        }
        members.push(Soldier::new(line, line.contains(DRIVER_MARKER)));
    }
    if !members.is_empty() {
        squads.push(Squad::new(members));
    }

    if squads.is_empty() {
        return Err(IoError::Input("no squads listed after the time window".into()));
    }

    Ok(RosterInput { window, squads })
}

/// Read and parse roster input from a file.
pub fn load_input(path: &Path) -> IoResult<RosterInput> {
    parse_input(&fs::read_to_string(path)?)
}
