//! Run statistics collection and reporting

use serde::Serialize;
use std::time::Duration;

/// Metrics collected over a single simulation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStatistics {
    /// Every calendar day touched by the date loop
    pub days_processed: usize,

    /// Days skipped because they fell in a break period
    pub days_skipped: usize,

    /// Days that produced at least one commit
    pub days_with_commits: usize,

    /// Total commits generated across the run (excluding the initial commit)
    pub total_commits: u64,

    /// History writer operations that failed and were skipped over
    pub failed_operations: usize,

    /// Wall-clock duration of the run
    #[serde(skip)]
    pub duration: Duration,
}

impl RunStatistics {
    /// Create an empty statistics record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed calendar day
    pub fn record_day_processed(&mut self) {
        self.days_processed += 1;
    }

    /// Record a day skipped due to a break period
    pub fn record_day_skipped(&mut self) {
        self.days_skipped += 1;
    }

    /// Record a day that produced at least one commit
    pub fn record_active_day(&mut self) {
        self.days_with_commits += 1;
    }

    /// Record one generated commit
    pub fn record_commit(&mut self) {
        self.total_commits += 1;
    }

    /// Record a failed history writer operation
    pub fn record_failed_operation(&mut self) {
        self.failed_operations += 1;
    }

    /// Set the measured wall-clock duration of the run
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Average commits per day that had any, or 0.0 when no day did
    pub fn average_commits_per_active_day(&self) -> f64 {
        if self.days_with_commits == 0 {
            return 0.0;
        }
        self.total_commits as f64 / self.days_with_commits as f64
    }

    /// Multi-line summary printed at the end of a run
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "=== SUMMARY ===".to_string(),
            format!("Total days processed: {}", self.days_processed),
            format!("Days skipped (break periods): {}", self.days_skipped),
            format!("Days with contributions: {}", self.days_with_commits),
            format!("Total commits generated: {}", self.total_commits),
        ];

        if self.days_with_commits > 0 {
            lines.push(format!(
                "Average commits per active day: {:.1}",
                self.average_commits_per_active_day()
            ));
        }

        if self.failed_operations > 0 {
            lines.push(format!("Failed history operations: {}", self.failed_operations));
        }

        lines.push(format!("Runtime: {:.2} seconds", self.duration.as_secs_f64()));
        lines.join("\n")
    }
}
