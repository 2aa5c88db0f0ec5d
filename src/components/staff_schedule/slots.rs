use super::hours::ResolvedWorkDay;
use chrono::{Duration, NaiveTime};

/// Classify a slot against a resolved working-hours window
///
/// On a day off every slot is outside working hours regardless of the
/// configured window. Otherwise the window is half-open: a slot equal
/// to the end time is already outside and not bookable.
pub fn is_outside_working_hours(slot: NaiveTime, resolved: &ResolvedWorkDay) -> bool {
    if !resolved.is_working_day {
        return true;
    }

    slot < resolved.start || slot >= resolved.end
}

/// Generate the fixed slot grid for the timeline view
///
/// Slots run from `day_start` up to but excluding `day_end`, stepping
/// by `granularity_minutes`.
pub fn slot_grid(day_start: NaiveTime, day_end: NaiveTime, granularity_minutes: u32) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    if granularity_minutes == 0 {
        return slots;
    }

    let step = Duration::minutes(i64::from(granularity_minutes));
    let mut current = day_start;
    while current < day_end {
        slots.push(current);
        let next = current + step;
        // NaiveTime arithmetic wraps at midnight; stop instead of looping
        if next <= current {
            break;
        }
        current = next;
    }

    slots
}
