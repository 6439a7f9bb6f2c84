//! Duty schedule output types.
//!
//! A [`Schedule`] holds one [`SquadSchedule`] per squad, each covering every
//! hour of the full night window (not just the squad's own patrol
//! sub-window).  With the `serde` feature the schedule serializes to the
//! wire shape consumed downstream:
//!
//! ```json
//! {
//!     "squad 1": [
//!         { "time": "22:00", "patrol": "Alice, Bob", "stove-watch": "Carol" },
//!         { "time": "23:00", "patrol": "-",          "stove-watch": "Alice" }
//!     ]
//! }
//! ```
//!
//! Squads are keyed by 1-based position; an hour outside the squad's patrol
//! sub-window carries the [`NO_PATROL`] sentinel.

/// Sentinel for an hour in which the squad has no patrol duty.
pub const NO_PATROL: &str = "-";

/// One hour of one squad's roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DutySlot {
    /// Clock-time label for the hour (`"HH:MM"`).
    pub time: String,
    /// The two patrol members, or `None` outside the squad's sub-window.
    pub patrol: Option<(String, String)>,
    /// The stove-watch member.
    pub stove_watch: String,
}

/// One squad's slots, in hour order, spanning the full night.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquadSchedule {
    pub slots: Vec<DutySlot>,
}

/// The complete roster: per-squad schedules in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    pub squads: Vec<SquadSchedule>,
}

// ── Serde impls ───────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{DutySlot, Schedule, SquadSchedule, NO_PATROL};

    impl Serialize for DutySlot {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(3))?;
            map.serialize_entry("time", &self.time)?;
            match &self.patrol {
                Some((first, second)) => {
                    map.serialize_entry("patrol", &format!("{first}, {second}"))?
                }
                None => map.serialize_entry("patrol", NO_PATROL)?,
            }
            map.serialize_entry("stove-watch", &self.stove_watch)?;
            map.end()
        }
    }

    impl Serialize for SquadSchedule {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.slots.serialize(serializer)
        }
    }

    impl Serialize for Schedule {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.squads.len()))?;
            for (i, squad) in self.squads.iter().enumerate() {
                map.serialize_entry(&format!("squad {}", i + 1), squad)?;
            }
            map.end()
        }
    }
}
