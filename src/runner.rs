//! AtomicTrades runner
//!
//! Construct with `AtomicTrades::new()` and call `run()`. A run on one
//! instance is not reentrant: a second caller is rejected, not queued.

use crate::config_manager::ConfigManager;
use crate::types::{RunReport, RunnerConfig};

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AtomicTradesError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Run already in progress")]
    AlreadyRunning,
}

pub struct AtomicTrades {
    config_manager: ConfigManager,

    // State
    running: AtomicBool,
    run_count: AtomicU64,
    last_report: RwLock<Option<RunReport>>,
}

/// Clears the running flag when the run ends, including on early return.
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AtomicTrades {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self::build(RunnerConfig::default())
    }

    /// Create a runner with an explicit configuration
    pub fn with_config(config: RunnerConfig) -> Result<Self, AtomicTradesError> {
        config.validate().map_err(AtomicTradesError::Config)?;
        Ok(Self::build(config))
    }

    /// Create a runner configured from `ATOMICTRADES_*` environment variables
    pub fn from_env() -> Result<Self, AtomicTradesError> {
        Self::with_config(RunnerConfig::from_env())
    }

    fn build(config: RunnerConfig) -> Self {
        Self {
            config_manager: ConfigManager::new(config),
            running: AtomicBool::new(false),
            run_count: AtomicU64::new(0),
            last_report: RwLock::new(None),
        }
    }

    /// Execute one run. Returns `true` on success.
    pub fn run(&self) -> bool {
        match self.try_run() {
            Ok(_) => true,
            Err(e) => {
                warn!("Run failed: {}", e);
                false
            }
        }
    }

    pub fn try_run(&self) -> Result<RunReport, AtomicTradesError> {
        self.run_with(|| {})
    }

    /// Runs `during` while the running flag is held.
    fn run_with<F: FnOnce()>(&self, during: F) -> Result<RunReport, AtomicTradesError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AtomicTradesError::AlreadyRunning);
        }
        let _guard = RunningGuard(&self.running);

        let name = self.config_manager.name();
        let started_at = Utc::now();
        let start = Instant::now();
        info!("[{}] Run started", name);

        during();

        // Only the flag holder writes the counter
        let run_count = self.run_count.load(Ordering::Acquire) + 1;

        let report = RunReport {
            name: name.clone(),
            success: true,
            run_count,
            started_at,
            finished_at: Utc::now(),
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!("[{}] Run #{} took {:.3}ms", name, run_count, report.duration_ms);
        info!("[{}] Run complete", name);

        // Publish the report before the count so a reader that sees run N also sees its report
        *self.last_report.write() = Some(report.clone());
        self.run_count.store(run_count, Ordering::Release);
        Ok(report)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Number of successful runs on this instance
    pub fn run_count(&self) -> u64 {
        self.run_count.load(Ordering::Acquire)
    }

    pub fn last_report(&self) -> Option<RunReport> {
        self.last_report.read().clone()
    }

    pub fn config(&self) -> RunnerConfig {
        self.config_manager.get_config()
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }
}

impl Default for AtomicTrades {
    fn default() -> Self {
        Self::new()
    }
}
