//! `nw-roster` — the duty allocation core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`distribute`] | `split_even`, `distribute` (driver-rest redistribution) |
//! | [`select`]     | `select_next`, `Duty`                                   |
//! | [`builder`]    | `build_roster`                                          |
//! | [`error`]      | `RosterError`, `DistributeError`, `RosterResult<T>`     |
//!
//! # Allocation model (summary)
//!
//! For a night of `H` hours split across `S` squads, squad `i` patrols a
//! contiguous sub-window of `split_even(H, S)[i]` hours and covers
//! stove-watch for the whole night.  Its active-hour budget is therefore
//!
//! ```text
//! budget = H + 2 * patrol_hours          (patrol costs 2 person-hours/hour)
//! ```
//!
//! The budget is split evenly across members, drivers are capped at
//! `H - DRIVER_REST_HOURS` so a 6-hour rest block always fits before the
//! window ends, and every hour consumes quota through `select_next`.

pub mod builder;
pub mod distribute;
pub mod error;
pub mod select;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::build_roster;
pub use distribute::{distribute, split_even, DRIVER_REST_HOURS};
pub use error::{DistributeError, RosterError, RosterResult};
pub use select::{select_next, Duty};
