use crate::components::staff_schedule::models::{Appointment, StaffMember};
use crate::components::staff_schedule::time::{parse_date, parse_time};
use crate::error::SalonResult;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::info;

/// Embedded mock data standing in for a real backend
const SEED_JSON: &str = include_str!("seed.json");

/// Query interface over the salon's staff and appointment data
///
/// The schedule computations only ever see data through this trait,
/// so a real backend can replace the in-memory arrays without
/// touching them.
#[async_trait]
pub trait ScheduleStore: Send + Sync + 'static {
    /// Get all staff members
    async fn get_staff(&self) -> SalonResult<Vec<StaffMember>>;

    /// Get a single staff member by id
    async fn get_staff_member(&self, staff_id: &str) -> SalonResult<Option<StaffMember>>;

    /// Get a staff member's appointments between two dates, inclusive
    async fn get_appointments(
        &self,
        staff_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> SalonResult<Vec<Appointment>>;

    /// Add a new appointment
    async fn add_appointment(&self, appointment: Appointment) -> SalonResult<()>;
}

/// Shape of the embedded seed fixture
#[derive(Debug, Deserialize)]
struct SeedData {
    staff: Vec<StaffMember>,
    appointments: Vec<Appointment>,
}

/// In-memory implementation of the schedule store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    staff: RwLock<Vec<StaffMember>>,
    appointments: RwLock<Vec<Appointment>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from the embedded mock data
    pub fn with_seed_data() -> SalonResult<Self> {
        let seed: SeedData = serde_json::from_str(SEED_JSON)?;

        info!(
            "Seeded schedule store with {} staff members and {} appointments",
            seed.staff.len(),
            seed.appointments.len()
        );

        Ok(Self {
            staff: RwLock::new(seed.staff),
            appointments: RwLock::new(seed.appointments),
        })
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn get_staff(&self) -> SalonResult<Vec<StaffMember>> {
        let staff = self.staff.read().await;
        Ok(staff.clone())
    }

    async fn get_staff_member(&self, staff_id: &str) -> SalonResult<Option<StaffMember>> {
        let staff = self.staff.read().await;
        Ok(staff.iter().find(|s| s.id == staff_id).cloned())
    }

    async fn get_appointments(
        &self,
        staff_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> SalonResult<Vec<Appointment>> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;

        let appointments = self.appointments.read().await;
        let mut matched: Vec<Appointment> = Vec::new();
        for appointment in appointments.iter() {
            if appointment.staff_id != staff_id {
                continue;
            }
            let date = parse_date(&appointment.date)?;
            if date >= start && date <= end {
                matched.push(appointment.clone());
            }
        }

        // Stable order for callers: by date, then start time, then id
        matched.sort_by(|a, b| {
            (a.date.as_str(), a.time.as_str(), a.id.as_str())
                .cmp(&(b.date.as_str(), b.time.as_str(), b.id.as_str()))
        });

        Ok(matched)
    }

    async fn add_appointment(&self, appointment: Appointment) -> SalonResult<()> {
        // Validate date and time up front so malformed bookings never land
        parse_date(&appointment.date)?;
        parse_time(&appointment.time)?;

        let mut appointments = self.appointments.write().await;
        appointments.push(appointment);
        Ok(())
    }
}
