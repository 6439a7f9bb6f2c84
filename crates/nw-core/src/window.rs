//! The night time window.
//!
//! # Design
//!
//! A window is a pair of clock times (`HH:MM`).  When the end is
//! chronologically at or before the start, the window crosses midnight and
//! the end is treated as belonging to the next day.  The scheduling
//! granularity is one whole hour: the duration is truncated to
//!
//!   night_hours = wrapped_minutes(end − start) / 60
//!
//! and all roster arithmetic downstream works on integer hour offsets into
//! the window, which keeps it exact.  A window shorter than one hour cannot
//! schedule anything and is rejected at construction.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime};

use crate::error::{NwError, NwResult};

const TIME_FORMAT: &str = "%H:%M";
const MINUTES_PER_DAY: i64 = 24 * 60;

/// The full night timeframe over which duties are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    start:       NaiveTime,
    end:         NaiveTime,
    night_hours: u32,
}

impl TimeWindow {
    /// Build a window from its two clock times.
    ///
    /// `end <= start` means the window crosses midnight.  Fails with
    /// [`NwError::Config`] if the window spans less than one whole hour.
    pub fn new(start: NaiveTime, end: NaiveTime) -> NwResult<Self> {
        let minutes = (end - start).num_minutes().rem_euclid(MINUTES_PER_DAY);
        let night_hours = (minutes / 60) as u32;
        if night_hours == 0 {
            return Err(NwError::Config(format!(
                "window {} to {} spans less than one hour",
                start.format(TIME_FORMAT),
                end.format(TIME_FORMAT),
            )));
        }
        Ok(Self { start, end, night_hours })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whole hours in the window.  Always ≥ 1.
    #[inline]
    pub fn night_hours(&self) -> u32 {
        self.night_hours
    }

    /// Clock-time label for hour `offset` of the window (`"HH:MM"`).
    ///
    /// `NaiveTime` addition wraps around midnight, so labels stay correct
    /// for midnight-crossing windows.
    pub fn hour_label(&self, offset: u32) -> String {
        let t = self.start + Duration::hours(i64::from(offset));
        t.format(TIME_FORMAT).to_string()
    }
}

impl FromStr for TimeWindow {
    type Err = NwError;

    /// Parse `"HH:MM to HH:MM"` (24-hour clock).
    fn from_str(s: &str) -> NwResult<Self> {
        let (start, end) = s
            .trim()
            .split_once(" to ")
            .ok_or_else(|| NwError::Parse(format!("expected \"HH:MM to HH:MM\", got {s:?}")))?;
        let parse_time = |t: &str| {
            NaiveTime::parse_from_str(t.trim(), TIME_FORMAT)
                .map_err(|e| NwError::Parse(format!("invalid time {t:?}: {e}")))
        };
        TimeWindow::new(parse_time(start)?, parse_time(end)?)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}
