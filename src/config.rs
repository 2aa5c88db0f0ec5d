use crate::error::{config_error, SalonResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use toml;

/// Default slot granularity for the schedule grid, in minutes
pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// Default first slot of the timeline grid
pub const DEFAULT_DAY_START: &str = "08:00";

/// Default end of the timeline grid (exclusive)
pub const DEFAULT_DAY_END: &str = "22:00";

/// Default path for persisted UI preferences
pub const DEFAULT_PREFERENCES_PATH: &str = "config/preferences.toml";

/// Main configuration structure for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Slot granularity of the schedule grid in minutes
    pub slot_minutes: u32,
    /// First slot of the timeline grid (HH:MM)
    pub day_start: String,
    /// End of the timeline grid, exclusive (HH:MM)
    pub day_end: String,
    /// Path of the persisted UI preferences file
    pub preferences_path: String,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> SalonResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // All settings are optional and fall back to defaults
        let slot_minutes = match env::var("SALON_SLOT_MINUTES") {
            Ok(value) => value
                .parse::<u32>()
                .map_err(|_| config_error("Invalid SALON_SLOT_MINUTES format"))?,
            Err(_) => DEFAULT_SLOT_MINUTES,
        };

        if slot_minutes == 0 {
            return Err(config_error("SALON_SLOT_MINUTES must be greater than zero"));
        }

        let day_start =
            env::var("SALON_DAY_START").unwrap_or_else(|_| String::from(DEFAULT_DAY_START));
        let day_end = env::var("SALON_DAY_END").unwrap_or_else(|_| String::from(DEFAULT_DAY_END));

        let preferences_path = env::var("SALON_PREFERENCES_PATH")
            .unwrap_or_else(|_| String::from(DEFAULT_PREFERENCES_PATH));

        // Initialize default components
        let mut components = HashMap::new();
        components.insert("staff_schedule".to_string(), true);
        components.insert("preferences".to_string(), true);

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/components.toml") {
            if let Ok(file_components) = toml::from_str::<HashMap<String, bool>>(&content) {
                // Merge with defaults
                for (key, value) in file_components {
                    components.insert(key, value);
                }
            }
        }

        Ok(Config {
            slot_minutes,
            day_start,
            day_end,
            preferences_path,
            components,
        })
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }

    /// Update component enabled status
    #[allow(dead_code)]
    pub fn set_component_enabled(&mut self, name: &str, enabled: bool) -> SalonResult<()> {
        self.components.insert(name.to_string(), enabled);
        self.save_components()
    }

    /// Save component configuration to file
    #[allow(dead_code)]
    fn save_components(&self) -> SalonResult<()> {
        // Create config directory if it doesn't exist
        if !Path::new("config").exists() {
            fs::create_dir("config")?;
        }

        let toml_str = toml::to_string(&self.components)?;
        fs::write("config/components.toml", toml_str)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut components = HashMap::new();
        components.insert("staff_schedule".to_string(), true);
        components.insert("preferences".to_string(), true);

        Config {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            day_start: DEFAULT_DAY_START.to_string(),
            day_end: DEFAULT_DAY_END.to_string(),
            preferences_path: DEFAULT_PREFERENCES_PATH.to_string(),
            components,
        }
    }
}
