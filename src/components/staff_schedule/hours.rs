use super::models::{DayOverride, WeeklyWorkHours, WorkHoursSpec};
use super::time::{parse_date, parse_time};
use crate::error::SalonResult;
use chrono::{Datelike, NaiveTime};
use std::collections::HashMap;

/// Default opening time applied when no working-hours data exists for a date
pub const DEFAULT_START: &str = "09:00";

/// Default closing time applied when no working-hours data exists for a date
pub const DEFAULT_END: &str = "20:00";

/// Effective working hours for one staff member on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWorkDay {
    pub is_working_day: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Resolve the effective working-hours window for a date
///
/// Lookup precedence: a date-keyed override wins, then the weekly
/// pattern entry for the date's weekday, then the permissive default
/// (working day, 09:00 to 20:00). A date is a day off only when a
/// resolved entry explicitly says so; missing data is never an error.
pub fn resolve_work_day(
    date_iso: &str,
    overrides: Option<&HashMap<String, DayOverride>>,
    weekly: Option<&[WeeklyWorkHours]>,
) -> SalonResult<ResolvedWorkDay> {
    // An explicit override for the date wins
    if let Some(entry) = overrides.and_then(|m| m.get(date_iso)) {
        return Ok(ResolvedWorkDay {
            is_working_day: entry.is_working_day,
            start: parse_time(&entry.start)?,
            end: parse_time(&entry.end)?,
        });
    }

    // Fall back to the weekly pattern entry for the date's weekday
    let date = parse_date(date_iso)?;
    let weekday = date.weekday().num_days_from_sunday() as u8;

    if let Some(entry) = weekly.and_then(|w| w.iter().find(|e| e.day_of_week == weekday)) {
        return Ok(ResolvedWorkDay {
            is_working_day: entry.is_working,
            start: parse_time(&entry.start_time)?,
            end: parse_time(&entry.end_time)?,
        });
    }

    // No data for this date: a working day with default hours
    Ok(ResolvedWorkDay {
        is_working_day: true,
        start: parse_time(DEFAULT_START)?,
        end: parse_time(DEFAULT_END)?,
    })
}

impl WorkHoursSpec {
    /// Resolve the working-hours window for a date
    ///
    /// Single normalization point over the two input shapes; consumers
    /// never branch on which shape a staff member carries.
    pub fn resolve(&self, date_iso: &str) -> SalonResult<ResolvedWorkDay> {
        match self {
            WorkHoursSpec::Weekly(pattern) => resolve_work_day(date_iso, None, Some(pattern)),
            WorkHoursSpec::Overrides(map) => resolve_work_day(date_iso, Some(map), None),
        }
    }
}
