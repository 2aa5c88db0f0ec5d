use super::placement::{appointments_at_slot, slot_span};
use super::slots::{is_outside_working_hours, slot_grid};
use super::time::parse_time;
use crate::components::staff_schedule::models::{Appointment, StaffMember};
use crate::config::Config;
use crate::error::SalonResult;
use chrono::NaiveTime;
use serde::Serialize;

/// Grid settings for the timeline view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Slot granularity in minutes
    pub granularity_minutes: u32,
    /// First slot of the grid
    pub day_start: NaiveTime,
    /// End of the grid, exclusive
    pub day_end: NaiveTime,
}

impl GridConfig {
    /// Build grid settings from the application configuration
    pub fn from_config(config: &Config) -> SalonResult<Self> {
        Ok(Self {
            granularity_minutes: config.slot_minutes,
            day_start: parse_time(&config.day_start)?,
            day_end: parse_time(&config.day_end)?,
        })
    }
}

/// An appointment placed at its starting slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedAppointment {
    pub appointment: Appointment,
    /// Consecutive slots the appointment visually occupies
    pub span: u32,
}

/// One slot row of the rendered day grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSlot {
    /// Slot time (HH:MM)
    pub time: String,
    /// Whether the slot falls outside the resolved working hours
    pub outside_working_hours: bool,
    /// Appointments beginning at this slot
    pub appointments: Vec<PlacedAppointment>,
}

/// Data-level day view for one staff member
///
/// Overlapping appointments are placed stacked at their starting
/// slots; conflict prevention is deliberately out of scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTimeline {
    pub staff_id: String,
    pub date: String,
    pub is_working_day: bool,
    pub slots: Vec<TimelineSlot>,
}

/// Compose resolver, classifier and placement into a day timeline
///
/// `appointments` is the staff member's appointment list for the
/// given date, as returned by the schedule store.
pub fn build_day_timeline(
    staff: &StaffMember,
    appointments: &[Appointment],
    date_iso: &str,
    grid: &GridConfig,
) -> SalonResult<DayTimeline> {
    let resolved = staff.work_hours.resolve(date_iso)?;

    let mut slots = Vec::new();
    for slot_time in slot_grid(grid.day_start, grid.day_end, grid.granularity_minutes) {
        let matched = appointments_at_slot(appointments, slot_time)?;

        let mut placed = Vec::with_capacity(matched.len());
        for appointment in matched {
            placed.push(PlacedAppointment {
                span: slot_span(appointment, grid.granularity_minutes)?,
                appointment: appointment.clone(),
            });
        }

        slots.push(TimelineSlot {
            time: slot_time.format("%H:%M").to_string(),
            outside_working_hours: is_outside_working_hours(slot_time, &resolved),
            appointments: placed,
        });
    }

    Ok(DayTimeline {
        staff_id: staff.id.clone(),
        date: date_iso.to_string(),
        is_working_day: resolved.is_working_day,
        slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::staff_schedule::models::{
        AppointmentStatus, WeeklyWorkHours, WorkHoursSpec,
    };

    fn grid() -> GridConfig {
        GridConfig {
            granularity_minutes: 30,
            day_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        }
    }

    fn staff() -> StaffMember {
        // Monday 10:00 to 18:00
        StaffMember {
            id: "staff-1".to_string(),
            name: "Mari Korhonen".to_string(),
            role: "Hairdresser".to_string(),
            work_hours: WorkHoursSpec::Weekly(vec![WeeklyWorkHours {
                day_of_week: 1,
                start_time: "10:00".to_string(),
                end_time: "18:00".to_string(),
                is_working: true,
            }]),
        }
    }

    fn appointment(id: &str, time: &str, duration: Option<u32>) -> Appointment {
        Appointment {
            id: id.to_string(),
            client_name: "Anna Virtanen".to_string(),
            staff_id: "staff-1".to_string(),
            date: "2024-03-18".to_string(),
            time: time.to_string(),
            end_time: None,
            duration_minutes: duration,
            status: AppointmentStatus::Confirmed,
            is_new: false,
        }
    }

    fn slot<'a>(timeline: &'a DayTimeline, time: &str) -> &'a TimelineSlot {
        timeline
            .slots
            .iter()
            .find(|s| s.time == time)
            .expect("slot present in grid")
    }

    #[test]
    fn test_day_timeline_composition() {
        let appointments = vec![appointment("a1", "10:00", Some(90))];
        let timeline = build_day_timeline(&staff(), &appointments, "2024-03-18", &grid()).unwrap();

        assert!(timeline.is_working_day);
        // 08:00 to 22:00 in 30 minute steps
        assert_eq!(timeline.slots.len(), 28);

        // Outside/inside the resolved 10:00-18:00 window
        assert!(slot(&timeline, "09:30").outside_working_hours);
        assert!(!slot(&timeline, "10:00").outside_working_hours);
        assert!(!slot(&timeline, "17:30").outside_working_hours);
        assert!(slot(&timeline, "18:00").outside_working_hours);

        // Appointment placed once, at its starting slot, with its span
        let start = slot(&timeline, "10:00");
        assert_eq!(start.appointments.len(), 1);
        assert_eq!(start.appointments[0].span, 3);
        assert!(slot(&timeline, "10:30").appointments.is_empty());
        assert!(slot(&timeline, "11:00").appointments.is_empty());
    }

    #[test]
    fn test_overlapping_appointments_stack() {
        let appointments = vec![
            appointment("b2", "10:00", Some(60)),
            appointment("a1", "10:00", Some(30)),
        ];
        let timeline = build_day_timeline(&staff(), &appointments, "2024-03-18", &grid()).unwrap();

        let start = slot(&timeline, "10:00");
        assert_eq!(start.appointments.len(), 2);
        assert_eq!(start.appointments[0].appointment.id, "a1");
        assert_eq!(start.appointments[1].appointment.id, "b2");
    }

    #[test]
    fn test_day_off_marks_every_slot_outside() {
        let mut staff = staff();
        staff.work_hours = WorkHoursSpec::Weekly(vec![WeeklyWorkHours {
            day_of_week: 1,
            start_time: "10:00".to_string(),
            end_time: "18:00".to_string(),
            is_working: false,
        }]);

        let timeline = build_day_timeline(&staff, &[], "2024-03-18", &grid()).unwrap();
        assert!(!timeline.is_working_day);
        assert!(timeline.slots.iter().all(|s| s.outside_working_hours));
    }

    #[test]
    fn test_pure_and_repeatable() {
        let appointments = vec![appointment("a1", "10:00", Some(90))];
        let first = build_day_timeline(&staff(), &appointments, "2024-03-18", &grid()).unwrap();
        let second = build_day_timeline(&staff(), &appointments, "2024-03-18", &grid()).unwrap();
        assert_eq!(first, second);
    }
}
