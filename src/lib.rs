//! Contribution Activity Simulator
//!
//! A backdated commit history generator that mimics a real contributor's
//! day-by-day activity pattern over a multi-year window: a very quiet start,
//! a gradual ramp-up, weekday/weekend rhythm, mid-month bursts, and fixed
//! break periods with no activity at all.
//!
//! # Overview
//!
//! For every calendar day in the configured inclusive range the simulator
//! decides whether the day falls in a break period, how many commits the day
//! receives, and the time of day for each commit. Each commit appends one
//! line to an append-only log file and is created through the external `git`
//! binary with an explicitly backdated author timestamp. At the end of the
//! run an optional remote is configured and pushed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use amzn_contribution_activity_rust::history::GitHistoryWriter;
//! use amzn_contribution_activity_rust::simulation::SimulationOrchestrator;
//! use amzn_contribution_activity_rust::types::SimulationConfig;
//!
//! let config = SimulationConfig { seed: Some(42), ..Default::default() };
//! let writer = GitHistoryWriter::new(&config.work_dir);
//! let mut orchestrator = SimulationOrchestrator::new(config, writer)?;
//! let stats = orchestrator.run()?;
//! println!("{}", stats.summary());
//! # Ok::<(), amzn_contribution_activity_rust::simulation::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Configuration, CLI arguments, and the count policy enum
//! - [`schedule`]: The activity simulator — blackout calendar, daily commit
//!   counts, and time-of-day sampling
//! - [`history`]: The history writer interface, its git implementation, and
//!   the contribution log file
//! - [`simulation`]: Orchestration, statistics, errors, and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod history;
pub mod schedule;
pub mod simulation;
pub mod types;

// Re-export the most commonly used types at the crate root

// Core types and configuration
pub use types::{CliArgs, ConfigValidationError, CountPolicy, SimulationConfig};

// Schedule generation
pub use schedule::{
    commits_for_day, progress_ratio, sample_commit_time, BlackoutCalendar, BlackoutWindow,
};

// History output
pub use history::{ContributionLog, GitHistoryWriter, HistoryError, HistoryWriter};

// Simulation orchestration
pub use simulation::{
    LoggingConfig, RunStatistics, SimulationError, SimulationOrchestrator, SimulationResult,
};
