use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Recurring weekly working hours for one weekday
///
/// `day_of_week` follows the source data convention: 0 = Sunday
/// through 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWorkHours {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub is_working: bool,
}

/// Date-specific working hours override (vacation, shortened day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOverride {
    pub start: String,
    pub end: String,
    pub is_working_day: bool,
}

/// Working-hours data for a staff member
///
/// The data arrives in either of two shapes: a recurring per-weekday
/// pattern or a map of per-date overrides keyed by `YYYY-MM-DD`.
/// Consumers never branch on the shape; `resolve` in `hours` is the
/// single normalization point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkHoursSpec {
    Weekly(Vec<WeeklyWorkHours>),
    Overrides(HashMap<String, DayOverride>),
}

/// Status of a booked appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

/// A booked appointment for one staff member on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment id
    pub id: String,
    /// Name of the client
    pub client_name: String,
    /// Id of the staff member the appointment belongs to
    pub staff_id: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Start time (HH:MM)
    pub time: String,
    /// End time (HH:MM), may be absent or inconsistent with duration
    #[serde(default)]
    pub end_time: Option<String>,
    /// Duration in minutes, may be absent
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Booking status
    pub status: AppointmentStatus,
    /// Whether the appointment was just created and not yet confirmed by staff
    #[serde(default)]
    pub is_new: bool,
}

impl Appointment {
    /// Create a new pending appointment with a generated id
    pub fn new(
        client_name: impl Into<String>,
        staff_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            staff_id: staff_id.into(),
            date: date.into(),
            time: time.into(),
            end_time: None,
            duration_minutes: None,
            status: AppointmentStatus::Pending,
            is_new: true,
        }
    }
}

/// A staff member and their working-hours data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub work_hours: WorkHoursSpec,
}
