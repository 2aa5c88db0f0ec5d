use crate::components::staff_schedule::models::{Appointment, StaffMember};
use crate::components::staff_schedule::time::{date_range, parse_date};
use crate::components::staff_schedule::timeline::{build_day_timeline, DayTimeline, GridConfig};
use crate::components::store::ScheduleStore;
use crate::config::Config;
use crate::error::{store_error, Error, SalonResult};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::info;

/// The schedule actor that processes messages
pub struct ScheduleActor {
    config: Arc<RwLock<Config>>,
    store: Arc<dyn ScheduleStore>,
    command_rx: mpsc::Receiver<ScheduleCommand>,
}

/// Commands that can be sent to the schedule actor
pub enum ScheduleCommand {
    GetStaff(mpsc::Sender<SalonResult<Vec<StaffMember>>>),
    GetAppointments(String, String, mpsc::Sender<SalonResult<Vec<Appointment>>>),
    GetDayTimeline(String, String, mpsc::Sender<SalonResult<DayTimeline>>),
    GetTimelinesForRange(
        String,
        String,
        String,
        mpsc::Sender<SalonResult<Vec<DayTimeline>>>,
    ),
    Shutdown,
}

/// Handle for communicating with the schedule actor
#[derive(Clone)]
pub struct ScheduleActorHandle {
    command_tx: mpsc::Sender<ScheduleCommand>,
}

impl ScheduleActorHandle {
    /// Get all staff members
    pub async fn get_staff(&self) -> SalonResult<Vec<StaffMember>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ScheduleCommand::GetStaff(response_tx))
            .await
            .map_err(|e| store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| store_error("Response channel closed"))?
    }

    /// Get a staff member's appointments for one date
    pub async fn get_appointments(
        &self,
        staff_id: impl Into<String>,
        date: impl Into<String>,
    ) -> SalonResult<Vec<Appointment>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ScheduleCommand::GetAppointments(
                staff_id.into(),
                date.into(),
                response_tx,
            ))
            .await
            .map_err(|e| store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| store_error("Response channel closed"))?
    }

    /// Get the composed day timeline for a staff member
    pub async fn get_day_timeline(
        &self,
        staff_id: impl Into<String>,
        date: impl Into<String>,
    ) -> SalonResult<DayTimeline> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ScheduleCommand::GetDayTimeline(
                staff_id.into(),
                date.into(),
                response_tx,
            ))
            .await
            .map_err(|e| store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| store_error("Response channel closed"))?
    }

    /// Get day timelines for a staff member over a date range
    pub async fn get_timelines_for_range(
        &self,
        staff_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> SalonResult<Vec<DayTimeline>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(ScheduleCommand::GetTimelinesForRange(
                staff_id.into(),
                start_date.into(),
                end_date.into(),
                response_tx,
            ))
            .await
            .map_err(|e| store_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| store_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> SalonResult<()> {
        let _ = self.command_tx.send(ScheduleCommand::Shutdown).await;
        Ok(())
    }
}

impl ScheduleActor {
    /// Create a new actor and return its handle
    pub fn new(
        config: Arc<RwLock<Config>>,
        store: Arc<dyn ScheduleStore>,
    ) -> (Self, ScheduleActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            config,
            store,
            command_rx,
        };

        let handle = ScheduleActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Schedule actor started");

        // Process commands
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                ScheduleCommand::GetStaff(response_tx) => {
                    let result = self.store.get_staff().await;
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::GetAppointments(staff_id, date, response_tx) => {
                    let result = self.store.get_appointments(&staff_id, &date, &date).await;
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::GetDayTimeline(staff_id, date, response_tx) => {
                    let result = self.day_timeline(&staff_id, &date).await;
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::GetTimelinesForRange(
                    staff_id,
                    start_date,
                    end_date,
                    response_tx,
                ) => {
                    let result = self
                        .timelines_for_range(&staff_id, &start_date, &end_date)
                        .await;
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::Shutdown => {
                    info!("Schedule actor shutting down");
                    break;
                }
            }
        }

        info!("Schedule actor shut down");
    }

    /// Grid settings from the current configuration
    async fn grid_config(&self) -> SalonResult<GridConfig> {
        let config = self.config.read().await;
        GridConfig::from_config(&config)
    }

    /// Compose the day timeline for one staff member
    async fn day_timeline(&self, staff_id: &str, date: &str) -> SalonResult<DayTimeline> {
        let staff = self
            .store
            .get_staff_member(staff_id)
            .await?
            .ok_or_else(|| Error::StaffNotFound(staff_id.to_string()))?;

        let appointments = self.store.get_appointments(staff_id, date, date).await?;
        let grid = self.grid_config().await?;

        build_day_timeline(&staff, &appointments, date, &grid)
    }

    /// Compose one timeline per date over an inclusive range
    async fn timelines_for_range(
        &self,
        staff_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> SalonResult<Vec<DayTimeline>> {
        let staff = self
            .store
            .get_staff_member(staff_id)
            .await?
            .ok_or_else(|| Error::StaffNotFound(staff_id.to_string()))?;

        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;

        // One store query for the whole range, then split per date
        let appointments = self
            .store
            .get_appointments(staff_id, start_date, end_date)
            .await?;
        let grid = self.grid_config().await?;

        let mut timelines = Vec::new();
        for date in date_range(start, end) {
            let date_str = date.format("%Y-%m-%d").to_string();
            let for_date: Vec<_> = appointments
                .iter()
                .filter(|a| a.date == date_str)
                .cloned()
                .collect();

            timelines.push(build_day_timeline(&staff, &for_date, &date_str, &grid)?);
        }

        Ok(timelines)
    }
}
