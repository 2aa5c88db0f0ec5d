use crate::components::preferences::Preferences;
use crate::components::staff_schedule::StaffSchedule;
use crate::components::store::ScheduleStore;
use crate::components::ComponentManager;
use crate::config::Config;
use crate::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Register and initialize all application components
///
/// The returned manager owns the component lifecycle; call
/// `shutdown_all` on it during application teardown.
pub async fn start_components(
    config: Arc<RwLock<Config>>,
    store: Arc<dyn ScheduleStore>,
) -> miette::Result<Arc<ComponentManager>> {
    let mut component_manager = ComponentManager::new(Arc::clone(&config));

    // Register the staff schedule component
    component_manager.register(StaffSchedule::new());

    // Register the UI preferences component
    component_manager.register(Preferences::new());

    let component_manager = Arc::new(component_manager);

    info!("Initializing components");
    component_manager
        .init_all(Arc::clone(&config), store)
        .await?;

    Ok(component_manager)
}
