use super::actor::{ScheduleActor, ScheduleActorHandle};
use super::models::{Appointment, StaffMember};
use super::timeline::DayTimeline;
use crate::components::store::ScheduleStore;
use crate::config::Config;
use crate::error::SalonResult;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the schedule actor
#[derive(Clone)]
pub struct ScheduleHandle {
    actor_handle: ScheduleActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl ScheduleHandle {
    /// Create a new ScheduleHandle and spawn the actor
    pub fn new(config: Arc<RwLock<Config>>, store: Arc<dyn ScheduleStore>) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = ScheduleActor::new(config, store);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Get all staff members
    pub async fn get_staff(&self) -> SalonResult<Vec<StaffMember>> {
        self.actor_handle.get_staff().await
    }

    /// Get a staff member's appointments for one date
    pub async fn get_appointments(
        &self,
        staff_id: impl Into<String>,
        date: impl Into<String>,
    ) -> SalonResult<Vec<Appointment>> {
        self.actor_handle.get_appointments(staff_id, date).await
    }

    /// Get the composed day timeline for a staff member
    pub async fn get_day_timeline(
        &self,
        staff_id: impl Into<String>,
        date: impl Into<String>,
    ) -> SalonResult<DayTimeline> {
        self.actor_handle.get_day_timeline(staff_id, date).await
    }

    /// Get day timelines for a staff member over an inclusive date range
    pub async fn get_timelines_for_range(
        &self,
        staff_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> SalonResult<Vec<DayTimeline>> {
        self.actor_handle
            .get_timelines_for_range(staff_id, start_date, end_date)
            .await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> SalonResult<()> {
        self.actor_handle.shutdown().await
    }
}
