//! AtomicTrades
//!
//! A zero-argument runner: build it with [`AtomicTrades::new`] and call
//! [`AtomicTrades::run`], which returns `true` when the run succeeds.

pub mod config_manager;
pub mod runner;
pub mod types;

pub use config_manager::ConfigManager;
pub use runner::{AtomicTrades, AtomicTradesError};
pub use types::{RunReport, RunnerConfig};
