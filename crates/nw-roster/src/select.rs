//! Per-hour eligibility selection.
//!
//! # Priority
//!
//! Candidates are ranked drivers-first, then by most remaining active
//! hours, lowest squad index on ties.  The ranking is recomputed at every
//! pick from the live quota table, which spreads consumption evenly and
//! lets exact-budget nights complete with every quota at 0.  Drivers keep
//! absolute priority because the rest gate (below) confines their capped
//! quotas to the final `night_hours - DRIVER_REST_HOURS` hours.
//!
//! # Driver-rest gate
//!
//! A driver picked at hour `h` with `q` remaining hours would, in the worst
//! case, stay on duty through hour `h + q` and still owe a 6-hour rest
//! block.  The driver is therefore ineligible while rest cannot already
//! have happened (`h < DRIVER_REST_HOURS`) and the remaining duty plus rest
//! would run past the window end.

use std::cmp::Reverse;
use std::fmt;

use nw_core::Squad;

use crate::distribute::DRIVER_REST_HOURS;

/// Which duty a selection is for.  Used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duty {
    Patrol,
    StoveWatch,
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duty::Patrol => write!(f, "patrol"),
            Duty::StoveWatch => write!(f, "stove-watch"),
        }
    }
}

/// Pick the next member for a duty at hour `hour` of the window and consume
/// one of their remaining active hours.
///
/// `excluded` holds the squad indices already assigned a duty this hour.
/// Returns `None` when no member is eligible — the caller decides whether
/// that is a scheduling-infeasibility error.
pub fn select_next(
    squad:       &Squad,
    quotas:      &mut [u32],
    night_hours: u32,
    hour:        u32,
    excluded:    &[usize],
) -> Option<usize> {
    debug_assert_eq!(squad.len(), quotas.len());

    let pick = (0..squad.len())
        .filter(|&i| !excluded.contains(&i))
        .filter(|&i| quotas[i] > 0)
        .filter(|&i| {
            let member = &squad.members()[i];
            !(member.is_driver
                && hour < DRIVER_REST_HOURS
                && hour + DRIVER_REST_HOURS + quotas[i] >= night_hours)
        })
        // Reverse(i) breaks (driver, quota) ties toward the lowest index.
        .max_by_key(|&i| (squad.members()[i].is_driver, quotas[i], Reverse(i)))?;

    quotas[pick] -= 1;
    Some(pick)
}
