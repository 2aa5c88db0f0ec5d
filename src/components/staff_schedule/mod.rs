mod actor;
mod handle;
pub mod hours;
pub mod models;
pub mod placement;
pub mod slots;
pub mod time;
pub mod timeline;

pub use handle::ScheduleHandle;

use crate::components::store::ScheduleStore;
use crate::config::Config;
use crate::error::SalonResult;
use async_trait::async_trait;
use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

lazy_static! {
    static ref ACTOR_STARTED: AtomicBool = AtomicBool::new(false);
}

/// Staff schedule component serving composed timeline views
#[derive(Default)]
pub struct StaffSchedule {
    handle: RwLock<Option<ScheduleHandle>>,
}

impl StaffSchedule {
    /// Create a new staff schedule component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<ScheduleHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl super::Component for StaffSchedule {
    fn name(&self) -> &'static str {
        "staff_schedule"
    }

    async fn init(
        &self,
        config: Arc<RwLock<Config>>,
        store: Arc<dyn ScheduleStore>,
    ) -> SalonResult<()> {
        // Create a new handle if one doesn't exist
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            if ACTOR_STARTED.swap(true, Ordering::SeqCst) {
                warn!("A schedule actor is already running in this process");
            }
            info!("Starting schedule actor");
            *handle_lock = Some(ScheduleHandle::new(config, store));
        }

        Ok(())
    }

    async fn shutdown(&self) -> SalonResult<()> {
        // Shutdown the handle if it exists
        let handle_lock = self.handle.read().await;
        if let Some(handle) = &*handle_lock {
            handle.shutdown().await?;
        }

        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
