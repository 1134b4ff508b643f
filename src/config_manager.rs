//! Config manager - holds the runner configuration
//!
//! Settings can be read concurrently while a run is in progress.

use crate::types::RunnerConfig;
use parking_lot::RwLock;
use tracing::info;

/// Manages runner configuration
pub struct ConfigManager {
    config: RwLock<RunnerConfig>,
}

impl ConfigManager {
    pub fn new(config: RunnerConfig) -> Self {
        info!("Initialized config manager");
        info!("Name: {}, Log level: {}", config.name, config.log_level);

        Self {
            config: RwLock::new(config),
        }
    }

    /// Get current configuration
    pub fn get_config(&self) -> RunnerConfig {
        self.config.read().clone()
    }

    pub fn name(&self) -> String {
        self.config.read().name.clone()
    }

    /// Rename the runner. Blank names are rejected and leave the config untouched.
    pub fn update_name(&self, name: &str) -> Result<(), String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }

        let mut config = self.config.write();
        config.name = name.to_string();
        info!("Updated name to {}", name);
        Ok(())
    }
}
