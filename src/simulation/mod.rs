//! Simulation orchestration and control
//!
//! This module drives the run end to end:
//!
//! - **SimulationOrchestrator**: iterates every day of the configured range,
//!   asks the schedule module for counts and timestamps, and hands each event
//!   to the history writer
//! - **RunStatistics**: collects and reports per-run metrics
//! - **SimulationError**: error handling for simulation operations
//! - **LoggingConfig**: centralized tracing configuration

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
