//! Roster building — the per-squad orchestration.
//!
//! For every squad the builder runs three strictly ordered phases over one
//! mutable quota table:
//!
//! 1. **Distribute**: compute the active-hour budget and split it into
//!    per-member quotas (driver caps applied).
//! 2. **Patrol pass**: for every hour inside the squad's own patrol
//!    sub-window, pick two members back-to-back (the second pick excludes
//!    the first).
//! 3. **Stove-watch pass**: for every hour of the full night, pick one
//!    member, excluding that hour's patrol picks.
//!
//! The two-pass structure means patrol for an hour is always assigned
//! before stove-watch for the same hour, which the exclusion rule depends
//! on.  The quota table is owned by this call and discarded with it.

use nw_core::{DutySlot, Schedule, Squad, SquadSchedule, TimeWindow};

use crate::distribute::{distribute, split_even};
use crate::error::{RosterError, RosterResult};
use crate::select::{select_next, Duty};

/// Build the complete overnight roster for `squads` over `window`.
///
/// Patrol sub-windows are contiguous, near-equal, and assigned to squads in
/// order; every squad covers stove-watch for the whole night.
pub fn build_roster(window: &TimeWindow, squads: &[Squad]) -> RosterResult<Schedule> {
    if squads.is_empty() {
        return Err(RosterError::Config("at least one squad is required".into()));
    }

    let night_hours = window.night_hours();
    let patrol_spans = split_even(night_hours, squads.len());

    let mut schedule = Schedule::default();
    let mut patrol_start = 0u32;

    for (i, squad) in squads.iter().enumerate() {
        let squad_no = i + 1;
        let patrol_hours = patrol_spans[i];
        let patrol_end = patrol_start + patrol_hours;

        // Patrol costs 2 person-hours per hour of the sub-window; stove-watch
        // costs 1 for every hour of the night.
        let budget = night_hours + 2 * patrol_hours;
        let mut quotas = distribute(squad, night_hours, budget)
            .map_err(|source| RosterError::Distribute { squad: squad_no, source })?;

        let squad_schedule = build_squad(
            squad,
            &mut quotas,
            window,
            patrol_start..patrol_end,
            squad_no,
        )?;
        schedule.squads.push(squad_schedule);

        patrol_start = patrol_end;
    }

    Ok(schedule)
}

/// Run the patrol and stove-watch passes for one squad.
fn build_squad(
    squad:         &Squad,
    quotas:        &mut [u32],
    window:        &TimeWindow,
    patrol_window: std::ops::Range<u32>,
    squad_no:      usize,
) -> RosterResult<SquadSchedule> {
    let night_hours = window.night_hours();

    let no_eligible = |duty: Duty, hour: u32| RosterError::NoEligibleMember {
        squad: squad_no,
        duty,
        time: window.hour_label(hour),
    };

    // ── Patrol pass ───────────────────────────────────────────────────────
    let mut patrols: Vec<Option<[usize; 2]>> = vec![None; night_hours as usize];
    for hour in patrol_window {
        let first = select_next(squad, quotas, night_hours, hour, &[])
            .ok_or_else(|| no_eligible(Duty::Patrol, hour))?;
        let second = select_next(squad, quotas, night_hours, hour, &[first])
            .ok_or_else(|| no_eligible(Duty::Patrol, hour))?;
        patrols[hour as usize] = Some([first, second]);
    }

    // ── Stove-watch pass ──────────────────────────────────────────────────
    let mut slots = Vec::with_capacity(night_hours as usize);
    for hour in 0..night_hours {
        let excluded: Vec<usize> = patrols[hour as usize]
            .map(|pair| pair.to_vec())
            .unwrap_or_default();
        let watcher = select_next(squad, quotas, night_hours, hour, &excluded)
            .ok_or_else(|| no_eligible(Duty::StoveWatch, hour))?;

        let members = squad.members();
        slots.push(DutySlot {
            time: window.hour_label(hour),
            patrol: patrols[hour as usize]
                .map(|[a, b]| (members[a].name.clone(), members[b].name.clone())),
            stove_watch: members[watcher].name.clone(),
        });
    }

    Ok(SquadSchedule { slots })
}
