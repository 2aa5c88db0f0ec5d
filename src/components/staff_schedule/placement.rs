use super::models::Appointment;
use super::time::{minutes_of_day, parse_time};
use crate::error::SalonResult;
use chrono::NaiveTime;

/// Find the appointments that begin exactly at a slot
///
/// An appointment belongs only to the slot matching its start time;
/// slots it merely covers mid-occurrence never return it again, the
/// renderer overlays it across them via the computed span. Ties on
/// identical start times are ordered by appointment id so render
/// order is deterministic.
pub fn appointments_at_slot<'a>(
    appointments: &'a [Appointment],
    slot: NaiveTime,
) -> SalonResult<Vec<&'a Appointment>> {
    let mut matched = Vec::new();
    for appointment in appointments {
        if parse_time(&appointment.time)? == slot {
            matched.push(appointment);
        }
    }

    matched.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(matched)
}

/// Number of consecutive grid slots an appointment visually occupies
///
/// Precedence: an explicit duration wins, then the end time, then a
/// single slot. The result is floored at 1 so a zero or negative
/// computed length never produces a zero-width render.
pub fn slot_span(appointment: &Appointment, granularity_minutes: u32) -> SalonResult<u32> {
    if granularity_minutes == 0 {
        return Ok(1);
    }

    let minutes = if let Some(duration) = appointment.duration_minutes {
        i64::from(duration)
    } else if let Some(end_time) = &appointment.end_time {
        let start = parse_time(&appointment.time)?;
        let end = parse_time(end_time)?;
        minutes_of_day(end) - minutes_of_day(start)
    } else {
        return Ok(1);
    };

    if minutes <= 0 {
        return Ok(1);
    }

    let granularity = i64::from(granularity_minutes);
    let span = (minutes + granularity - 1) / granularity;
    Ok(span.max(1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::staff_schedule::models::AppointmentStatus;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn appointment(id: &str, time: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            client_name: "Anna Virtanen".to_string(),
            staff_id: "staff-1".to_string(),
            date: "2024-03-18".to_string(),
            time: time.to_string(),
            end_time: None,
            duration_minutes: None,
            status: AppointmentStatus::Confirmed,
            is_new: false,
        }
    }

    #[test]
    fn test_span_from_duration() {
        let mut appt = appointment("a1", "10:00");
        appt.duration_minutes = Some(90);

        assert_eq!(slot_span(&appt, 30).unwrap(), 3);
    }

    #[test]
    fn test_span_from_end_time() {
        let mut appt = appointment("a1", "10:00");
        appt.end_time = Some("11:00".to_string());

        assert_eq!(slot_span(&appt, 30).unwrap(), 2);
    }

    #[test]
    fn test_span_defaults_to_one() {
        let appt = appointment("a1", "10:00");
        assert_eq!(slot_span(&appt, 30).unwrap(), 1);
    }

    #[test]
    fn test_duration_wins_over_end_time() {
        let mut appt = appointment("a1", "10:00");
        appt.duration_minutes = Some(30);
        appt.end_time = Some("12:00".to_string());

        assert_eq!(slot_span(&appt, 30).unwrap(), 1);
    }

    #[test]
    fn test_span_rounds_up() {
        let mut appt = appointment("a1", "10:00");
        appt.duration_minutes = Some(45);

        assert_eq!(slot_span(&appt, 30).unwrap(), 2);
    }

    #[test]
    fn test_span_floors_at_one() {
        let mut appt = appointment("a1", "10:00");
        appt.duration_minutes = Some(0);
        assert_eq!(slot_span(&appt, 30).unwrap(), 1);

        // End before start still renders one slot
        let mut appt = appointment("a1", "10:00");
        appt.end_time = Some("09:00".to_string());
        assert_eq!(slot_span(&appt, 30).unwrap(), 1);
    }

    #[test]
    fn test_appointment_matches_only_its_starting_slot() {
        let mut appt = appointment("a1", "10:00");
        appt.duration_minutes = Some(90);
        let appointments = vec![appt];

        let at_start = appointments_at_slot(&appointments, hm(10, 0)).unwrap();
        assert_eq!(at_start.len(), 1);

        // Covered mid-occurrence, but not returned again
        let mid = appointments_at_slot(&appointments, hm(10, 30)).unwrap();
        assert!(mid.is_empty());
    }

    #[test]
    fn test_identical_start_times_sorted_by_id() {
        let appointments = vec![
            appointment("b2", "10:00"),
            appointment("a1", "10:00"),
            appointment("c3", "11:00"),
        ];

        let matched = appointments_at_slot(&appointments, hm(10, 0)).unwrap();
        let ids: Vec<&str> = matched.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b2"]);
    }

    #[test]
    fn test_malformed_start_time_rejected() {
        let appointments = vec![appointment("a1", "10am")];
        assert!(appointments_at_slot(&appointments, hm(10, 0)).is_err());

        let mut appt = appointment("a1", "10:00");
        appt.end_time = Some("eleven".to_string());
        assert!(slot_span(&appt, 30).is_err());
    }
}
