//! `nw-core` — foundational types for the nightwatch duty roster.
//!
//! This crate is a dependency of every other `nw-*` crate.  It intentionally
//! has no `nw-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`window`]   | `TimeWindow` — the night timeframe, midnight crossing |
//! | [`soldier`]  | `Soldier`, `Squad`                                    |
//! | [`schedule`] | `DutySlot`, `SquadSchedule`, `Schedule`               |
//! | [`error`]    | `NwError`, `NwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize` to the schedule types (used by `nw-io`)   |

pub mod error;
pub mod schedule;
pub mod soldier;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NwError, NwResult};
pub use schedule::{DutySlot, Schedule, SquadSchedule, NO_PATROL};
pub use soldier::{Soldier, Squad};
pub use window::TimeWindow;
