use crate::components::store::ScheduleStore;
use crate::config::Config;
use crate::error::SalonResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Color theme of the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Persisted UI preferences
///
/// The only durably stored state in the application; everything else
/// lives in memory behind the schedule store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_show_tooltips")]
    pub show_tooltips: bool,
}

fn default_show_tooltips() -> bool {
    true
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_tooltips: true,
        }
    }
}

/// Injected accessor for the UI preferences
///
/// Passed to view code explicitly instead of living in an ambient
/// module-level singleton.
#[derive(Clone, Default)]
pub struct PreferencesHandle {
    inner: Arc<RwLock<UiPreferences>>,
}

impl PreferencesHandle {
    /// Get a snapshot of the current preferences
    pub async fn get(&self) -> UiPreferences {
        self.inner.read().await.clone()
    }

    /// Replace the current preferences
    pub async fn set(&self, preferences: UiPreferences) {
        *self.inner.write().await = preferences;
    }
}

/// UI preferences component with load/save lifecycle
#[derive(Default)]
pub struct Preferences {
    handle: PreferencesHandle,
    path: RwLock<Option<PathBuf>>,
}

impl Preferences {
    /// Create a new preferences component
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the injected preferences handle
    pub fn handle(&self) -> PreferencesHandle {
        self.handle.clone()
    }

    /// Load preferences from a TOML file, falling back to defaults
    fn load_from(path: &Path) -> UiPreferences {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(preferences) => preferences,
                Err(e) => {
                    warn!("Ignoring malformed preferences file: {}", e);
                    UiPreferences::default()
                }
            },
            // A missing file is the first-run case, not an error
            Err(_) => UiPreferences::default(),
        }
    }

    /// Save preferences to a TOML file
    fn save_to(path: &Path, preferences: &UiPreferences) -> SalonResult<()> {
        // Create the parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_str = toml::to_string(preferences)?;
        fs::write(path, toml_str)?;

        Ok(())
    }
}

#[async_trait]
impl super::Component for Preferences {
    fn name(&self) -> &'static str {
        "preferences"
    }

    async fn init(
        &self,
        config: Arc<RwLock<Config>>,
        _store: Arc<dyn ScheduleStore>,
    ) -> SalonResult<()> {
        let path = {
            let config_read = config.read().await;
            PathBuf::from(&config_read.preferences_path)
        };

        let preferences = Self::load_from(&path);
        info!("Loaded UI preferences from {}", path.display());

        self.handle.set(preferences).await;
        *self.path.write().await = Some(path);

        Ok(())
    }

    async fn shutdown(&self) -> SalonResult<()> {
        let path_lock = self.path.read().await;
        if let Some(path) = &*path_lock {
            let preferences = self.handle.get().await;
            Self::save_to(path, &preferences)?;
            info!("Saved UI preferences to {}", path.display());
        }

        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
