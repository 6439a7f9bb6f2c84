//! JSON schedule output.
//!
//! Schedules are written pretty-printed with 4-space indentation, keyed
//! `"squad 1"`, `"squad 2"`, ... in input order (see the serialization
//! notes on [`Schedule`]).

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use nw_core::Schedule;

use crate::error::IoResult;

/// Render `schedule` as pretty-printed JSON with 4-space indentation.
pub fn to_json_pretty(schedule: &Schedule) -> IoResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    schedule.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `schedule` to `path` as pretty-printed JSON.
pub fn write_json(path: &Path, schedule: &Schedule) -> IoResult<()> {
    fs::write(path, to_json_pretty(schedule)?)?;
    Ok(())
}
