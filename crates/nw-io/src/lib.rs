//! `nw-io` — roster input parsing and JSON schedule output.
//!
//! | Module  | Responsibility                                             |
//! |---------|------------------------------------------------------------|
//! | `parse` | Plain-text input: window line + blank-line-separated squads |
//! | `json`  | Pretty-printed JSON rendering of a built [`Schedule`]       |
//! | `error` | [`IoError`] / [`IoResult`]                                  |
//!
//! [`Schedule`]: nw_core::Schedule

pub mod error;
pub mod json;
pub mod parse;


pub use error::{IoError, IoResult};
pub use json::{to_json_pretty, write_json};
pub use parse::{load_input, parse_input, RosterInput, DRIVER_MARKER};
