//! Type definitions for the AtomicTrades runner

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

pub const DEFAULT_NAME: &str = "atomictrades";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_NAME: &str = "ATOMICTRADES_NAME";
pub const ENV_LOG_LEVEL: &str = "ATOMICTRADES_LOG_LEVEL";

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub name: String,
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    /// Missing or blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = non_blank(lookup(ENV_NAME)) {
            config.name = name;
        }
        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = level;
        }

        config
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parse `log_level` as a plain level (`off`, `error` .. `trace`).
    /// Bare words would otherwise be read by `EnvFilter` as target names.
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| format!("invalid log level: {}", self.log_level))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Summary of a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub name: String,
    pub success: bool,
    pub run_count: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.name, "atomictrades");
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            (ENV_NAME, "desk-a"),
            (ENV_LOG_LEVEL, "debug"),
        ]));
        assert_eq!(config.name, "desk-a");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = RunnerConfig::from_lookup(lookup_from(&[
            (ENV_NAME, "   "),
            (ENV_LOG_LEVEL, ""),
        ]));
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let config = RunnerConfig {
            name: " \t".to_string(),
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = RunnerConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "verbose")]));
        assert_eq!(config.log_level, "verbose");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_filter_accepts_levels() {
        for (raw, expected) in [
            ("off", LevelFilter::OFF),
            ("warn", LevelFilter::WARN),
            ("DEBUG", LevelFilter::DEBUG),
            ("trace", LevelFilter::TRACE),
        ] {
            let config = RunnerConfig {
                log_level: raw.to_string(),
                ..RunnerConfig::default()
            };
            assert_eq!(config.level_filter().unwrap(), expected);
        }
    }
}
