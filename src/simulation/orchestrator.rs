//! Main simulation orchestrator
//!
//! Iterates every calendar day of the configured range, consults the schedule
//! module for blackout decisions, daily counts, and commit times, and hands
//! each generated event to the history writer. History writer failures are
//! logged and counted but never abort the run; the next step proceeds as if
//! the failed one had produced nothing.

use crate::history::{ContributionLog, HistoryError, HistoryWriter};
use crate::schedule::{commits_for_day, sample_commit_time, BlackoutCalendar};
use crate::simulation::{RunStatistics, SimulationError, SimulationResult};
use crate::types::SimulationConfig;
use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Main simulation orchestrator that coordinates all components
#[derive(Debug)]
pub struct SimulationOrchestrator<W: HistoryWriter> {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// Fixed break periods with no activity
    calendar: BlackoutCalendar,
    /// Collaborator performing all repository mutation
    writer: W,
    /// Append-only contribution log file
    log: ContributionLog,
    /// Random number generator with optional seed
    rng: StdRng,
    /// Metrics collected over the run
    statistics: RunStatistics,
}

impl<W: HistoryWriter> SimulationOrchestrator<W> {
    /// Create a new simulation orchestrator
    #[instrument(skip(config, writer), fields(start = %config.start_date, end = %config.end_date))]
    pub fn new(config: SimulationConfig, writer: W) -> SimulationResult<Self> {
        config
            .validate()
            .map_err(|e| SimulationError::configuration_error(e.to_string()))?;

        info!(
            "Initializing orchestrator for {} through {} ({} policy)",
            config.start_date, config.end_date, config.count_policy
        );

        // Initialize random number generator with optional seed
        let rng: StdRng = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            rand::SeedableRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            rand::SeedableRng::from_entropy()
        };

        std::fs::create_dir_all(&config.work_dir)?;
        let log = ContributionLog::new(Path::new(&config.work_dir).join(&config.log_file));

        Ok(Self {
            config,
            calendar: BlackoutCalendar::standard(),
            writer,
            log,
            rng,
            statistics: RunStatistics::new(),
        })
    }

    /// Metrics collected so far
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// The blackout calendar in effect
    pub fn calendar(&self) -> &BlackoutCalendar {
        &self.calendar
    }

    /// Run the full simulation and return the final statistics
    pub fn run(&mut self) -> SimulationResult<RunStatistics> {
        let started = Instant::now();

        self.initialize_history()?;

        // The sequence counter is threaded explicitly through the loop; it
        // starts at 1 for the first event and increases by exactly 1 per
        // event across the whole run.
        let mut sequence: u64 = 0;

        let mut date = self.config.start_date;
        while date <= self.config.end_date {
            sequence = self.generate_day(date, sequence)?;
            date = date
                .succ_opt()
                .ok_or_else(|| SimulationError::schedule_error("date range overflow"))?;
        }

        self.finalize_remote();

        self.statistics.set_duration(started.elapsed());
        info!(
            "Run complete: {} commits over {} active days",
            self.statistics.total_commits, self.statistics.days_with_commits
        );
        Ok(self.statistics.clone())
    }

    /// Process a single calendar day, returning the updated sequence counter
    fn generate_day(&mut self, date: NaiveDate, mut sequence: u64) -> SimulationResult<u64> {
        self.statistics.record_day_processed();

        if self.calendar.is_blackout(date) {
            debug!("Skipping {} (break period)", date);
            self.statistics.record_day_skipped();
            return Ok(sequence);
        }

        let count = commits_for_day(
            date,
            self.config.start_date,
            self.config.end_date,
            self.config.count_policy,
            &mut self.rng,
        );

        if count == 0 {
            return Ok(sequence);
        }

        self.statistics.record_active_day();
        for _ in 0..count {
            let (hour, minute) = sample_commit_time(&mut self.rng);
            let timestamp = date.and_hms_opt(hour, minute, 0).ok_or_else(|| {
                SimulationError::schedule_error(format!(
                    "invalid commit time {:02}:{:02} on {}",
                    hour, minute, date
                ))
            })?;

            sequence += 1;
            self.record_event(timestamp, sequence)?;
        }

        Ok(sequence)
    }

    /// Append one log line and commit it with the backdated timestamp
    fn record_event(&mut self, timestamp: NaiveDateTime, sequence: u64) -> SimulationResult<()> {
        self.log.append_entry(timestamp, sequence)?;

        let staged = self.writer.stage_all();
        self.tolerate("stage", staged);

        let message = format!("Contribution: {}", timestamp.format("%Y-%m-%d %H:%M"));
        let committed = self.writer.commit_with_timestamp(&message, timestamp);
        self.tolerate("commit", committed);

        self.statistics.record_commit();
        debug!("Created commit #{} for {}", sequence, timestamp.format("%Y-%m-%d %H:%M"));
        Ok(())
    }

    /// Initialize the repository, write the log header, and create the
    /// initial commit (backdated to midnight of the start date)
    fn initialize_history(&mut self) -> SimulationResult<()> {
        let initialized = self.writer.init_if_absent();
        self.tolerate("repository init", initialized);

        self.log.initialize()?;

        let midnight = self.config.start_date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            SimulationError::schedule_error("start date has no midnight representation")
        })?;

        let staged = self.writer.stage_all();
        self.tolerate("stage", staged);
        let committed = self.writer.commit_with_timestamp("Initial commit", midnight);
        self.tolerate("initial commit", committed);

        Ok(())
    }

    /// Configure the remote and push, if a repository URL was supplied
    fn finalize_remote(&mut self) {
        let Some(url) = self.config.repository.clone() else {
            info!("No repository configured; skipping remote setup and push");
            return;
        };

        let configured = self.writer.configure_remote(&url);
        self.tolerate("remote configuration", configured);

        info!("Pushing to {}", url);
        match self.writer.push(&self.config.branch) {
            Ok(()) => info!("Successfully pushed to {}", self.config.branch),
            Err(error) => {
                warn!("Push failed (no fallback is attempted): {}", error);
                self.statistics.record_failed_operation();
            }
        }
    }

    /// Log a failed history operation and keep going
    fn tolerate(&mut self, operation: &str, result: Result<(), HistoryError>) {
        if let Err(error) = result {
            warn!("History operation '{}' failed, continuing: {}", operation, error);
            self.statistics.record_failed_operation();
        }
    }
}
