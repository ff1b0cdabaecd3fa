//! Append-only contribution log file
//!
//! One human-readable line per generated commit, preceded by a fixed header
//! written once at initialization. The file is the only persisted state the
//! simulator owns directly; everything else lives in the git history.

use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Title line of the log header
const HEADER_TITLE: &str = "GitHub Activity Contributions";

/// Width of the underline beneath the header title
const HEADER_RULE_WIDTH: usize = 30;

/// The append-only text log recording one line per simulated commit
#[derive(Debug, Clone)]
pub struct ContributionLog {
    path: PathBuf,
}

impl ContributionLog {
    /// Create a log handle for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the fixed three-line header, truncating any previous content
    pub fn initialize(&self) -> io::Result<()> {
        let mut file = std::fs::File::create(&self.path)?;
        writeln!(file, "{}", HEADER_TITLE)?;
        writeln!(file, "{}", "=".repeat(HEADER_RULE_WIDTH))?;
        writeln!(file)?;
        Ok(())
    }

    /// Append one entry in the fixed format
    /// `Contribution: YYYY-MM-DD HH:MM - Commit #<sequence>`
    pub fn append_entry(&self, timestamp: NaiveDateTime, sequence: u64) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(
            file,
            "Contribution: {} - Commit #{}",
            timestamp.format("%Y-%m-%d %H:%M"),
            sequence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn test_initialize_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContributionLog::new(dir.path().join("contributions.txt"));

        log.initialize().unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        let expected = format!("GitHub Activity Contributions\n{}\n\n", "=".repeat(30));
        assert_eq!(content, expected);
    }

    #[test]
    fn test_append_entry_format() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContributionLog::new(dir.path().join("contributions.txt"));

        log.initialize().unwrap();
        log.append_entry(timestamp(2024, 3, 9, 14, 5), 7).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.ends_with("Contribution: 2024-03-09 14:05 - Commit #7\n"));
    }

    #[test]
    fn test_entries_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContributionLog::new(dir.path().join("contributions.txt"));

        log.initialize().unwrap();
        for sequence in 1..=3 {
            log.append_entry(timestamp(2024, 1, 1, 10, 0), sequence).unwrap();
        }

        let content = fs::read_to_string(log.path()).unwrap();
        let entries: Vec<&str> =
            content.lines().filter(|line| line.starts_with("Contribution:")).collect();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].ends_with("#1"));
        assert!(entries[2].ends_with("#3"));
    }

    #[test]
    fn test_initialize_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContributionLog::new(dir.path().join("contributions.txt"));

        log.initialize().unwrap();
        log.append_entry(timestamp(2024, 1, 1, 10, 0), 1).unwrap();
        log.initialize().unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(!content.contains("Commit #1"));
    }

    #[test]
    fn test_append_without_initialize_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContributionLog::new(dir.path().join("contributions.txt"));

        log.append_entry(timestamp(2024, 1, 1, 0, 30), 1).unwrap();
        assert!(log.path().exists());
    }
}
