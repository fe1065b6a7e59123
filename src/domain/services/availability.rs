use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::warn;

use crate::domain::models::schedule::{ScheduleDay, ScheduleWithRates};
use crate::domain::models::unavailable_day::UnavailableDay;

/// A parsed "HH:MM - HH:MM" request range. Same-day semantics: start and end
/// belong to the same calendar day, so a plain `NaiveTime` comparison is
/// enough for window containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Parses the literal wire format `"HH:MM - HH:MM"`. Anything else is a
    /// non-range, not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let (start_str, end_str) = raw.split_once(" - ")?;
        let start = NaiveTime::parse_from_str(start_str, "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(end_str, "%H:%M").ok()?;
        Some(Self { start, end })
    }
}

/// Calendar-convention weekday: 0=Sunday .. 6=Saturday.
pub fn day_of_week(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// Whether a calendar date is bookable at all for a complex.
///
/// A date is closed when it appears in the blocked-date list (exact calendar
/// day match, complex-scoped or global rows alike), or when its weekday row is
/// inactive. A missing weekday row counts as inactive: seeding creates all
/// seven at complex creation, so the lookup only misses on corrupted data.
pub fn is_day_open(
    date: NaiveDate,
    schedule_days: &[ScheduleDay],
    unavailable_days: &[UnavailableDay],
) -> bool {
    if unavailable_days.iter().any(|d| d.date == date) {
        return false;
    }

    let dow = day_of_week(date);
    schedule_days
        .iter()
        .find(|d| d.day_of_week == dow)
        .map(|d| d.is_active)
        .unwrap_or(false)
}

/// Finds the schedule window serving a requested range on a given date.
///
/// A schedule matches when its bound `ScheduleDay` is the date's weekday and
/// active, and its `[start, end)` window fully contains the requested range.
/// The first match in iteration order wins; order is the persisted insertion
/// order, and ties are not broken any further. Windows whose stored times do
/// not parse are skipped.
pub fn find_matching_schedule<'a>(
    schedules: &'a [ScheduleWithRates],
    schedule_days: &[ScheduleDay],
    date: NaiveDate,
    requested: &TimeRange,
) -> Option<&'a ScheduleWithRates> {
    let dow = day_of_week(date);

    schedules.iter().find(|entry| {
        let schedule = &entry.schedule;

        let day_matches = schedule_days
            .iter()
            .find(|d| d.id == schedule.schedule_day_id)
            .is_some_and(|d| d.day_of_week == dow && d.is_active);
        if !day_matches {
            return false;
        }

        let (Ok(win_start), Ok(win_end)) = (
            NaiveTime::parse_from_str(&schedule.start_time, "%H:%M"),
            NaiveTime::parse_from_str(&schedule.end_time, "%H:%M"),
        ) else {
            warn!(
                schedule_id = %schedule.id,
                "Skipping schedule with unparseable time window {} - {}",
                schedule.start_time, schedule.end_time
            );
            return false;
        };

        requested.start >= win_start && requested.end <= win_end
    })
}

/// Validates that a selected end hour is reachable from a selected start hour.
///
/// Hours 00-05 count as belonging to the next calendar day. From an
/// early-morning start (00-05) the end must stay inside the early-morning
/// block and be later than the start. From a daytime start (06-23) the end is
/// either later the same evening, or anywhere inside 00-05 as a next-day
/// rollover. Rollover works in that direction only.
pub fn is_valid_end_time(end_time: &str, start_time: &str) -> bool {
    let (Some(start_hour), Some(end_hour)) = (parse_hour(start_time), parse_hour(end_time)) else {
        return false;
    };

    if start_hour <= 5 {
        end_hour > start_hour && end_hour <= 5
    } else {
        (end_hour > start_hour && end_hour <= 23) || end_hour <= 5
    }
}

fn parse_hour(raw: &str) -> Option<u32> {
    let hour: u32 = raw.split(':').next()?.parse().ok()?;
    if hour <= 23 { Some(hour) } else { None }
}
