//! Active-hour quota distribution.
//!
//! # Algorithm
//!
//! 1. Split the budget into near-equal contiguous chunks, one per member
//!    (chunk sizes differ by at most 1; earlier chunks take the remainder
//!    first).
//! 2. If any driver's nominal quota exceeds `night_hours - DRIVER_REST_HOURS`
//!    the driver cannot both serve it and still fit an uninterrupted rest
//!    block before the window ends: cap every driver at that maximum and
//!    recursively distribute the remaining budget across the non-driver
//!    remainder with the same rule.
//!
//! Recursion is pure over immutable slices; results are mapped back to the
//! caller's member order, so the squad itself is never reordered.

use nw_core::Squad;

use crate::error::DistributeError;

/// Length of the uninterrupted rest block every driver must receive before
/// the window ends, in hours.
pub const DRIVER_REST_HOURS: u32 = 6;

/// Split `total` into `parts` near-equal chunks, earlier chunks larger.
///
/// `split_even(8, 3)` → `[3, 3, 2]`.  Chunks are legitimately 0 when
/// `total < parts`.
///
/// # Panics
///
/// Panics in debug mode if `parts == 0`.
pub fn split_even(total: u32, parts: usize) -> Vec<u32> {
    debug_assert!(parts > 0, "split_even over zero parts");
    let parts_u32 = parts as u32;
    let base = total / parts_u32;
    let remainder = (total % parts_u32) as usize;
    (0..parts)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Distribute `budget` active hours across `squad`, in squad order.
///
/// The returned quotas sum to `budget` exactly.  No driver receives more
/// than `night_hours - DRIVER_REST_HOURS`; hours a driver cannot absorb are
/// pushed onto non-drivers via the same even-split rule.
pub fn distribute(
    squad:       &Squad,
    night_hours: u32,
    budget:      u32,
) -> Result<Vec<u32>, DistributeError> {
    if squad.is_empty() {
        return Err(DistributeError::EmptySquad);
    }
    let flags: Vec<bool> = squad.members().iter().map(|m| m.is_driver).collect();
    distribute_flags(&flags, night_hours, budget)
}

/// Recursive worker over driver flags.
///
/// The empty-slice base case only succeeds with a zero budget: a positive
/// remainder with nobody left to take it means the squad is all drivers and
/// the budget structurally breaks the rest guarantee.
fn distribute_flags(
    is_driver:   &[bool],
    night_hours: u32,
    budget:      u32,
) -> Result<Vec<u32>, DistributeError> {
    if is_driver.is_empty() {
        return if budget == 0 {
            Ok(Vec::new())
        } else {
            Err(DistributeError::RestOverflow { remaining: budget })
        };
    }

    let mut quotas = split_even(budget, is_driver.len());

    // A night shorter than the rest block leaves drivers no duty at all.
    let max_driver_quota = night_hours.saturating_sub(DRIVER_REST_HOURS);
    let over_cap = is_driver
        .iter()
        .zip(&quotas)
        .any(|(&driver, &q)| driver && q > max_driver_quota);
    if !over_cap {
        return Ok(quotas);
    }

    // Cap every driver and re-split what is left across the non-drivers.
    let driver_count = is_driver.iter().filter(|&&d| d).count() as u32;
    let remaining = budget
        .checked_sub(driver_count * max_driver_quota)
        .ok_or(DistributeError::RestOverflow { remaining: 0 })?;

    let non_driver_flags: Vec<bool> = is_driver
        .iter()
        .copied()
        .filter(|&d| !d)
        .collect();
    let redistributed = distribute_flags(&non_driver_flags, night_hours, remaining)?;

    // Non-drivers keep their relative order, so a running index lines up.
    let mut next = 0;
    for (quota, &driver) in quotas.iter_mut().zip(is_driver) {
        if driver {
            *quota = max_driver_quota;
        } else {
            *quota = redistributed[next];
            next += 1;
        }
    }
    Ok(quotas)
}
