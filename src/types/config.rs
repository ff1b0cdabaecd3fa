//! Configuration structures for the contribution activity simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the date range, commit count policy, and repository targets.

use super::CountPolicy;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default values shared between the CLI surface and the config structure
pub mod defaults {
    /// First day of the simulated range
    pub const START_DATE: &str = "2023-01-01";

    /// Last day of the simulated range (inclusive)
    pub const END_DATE: &str = "2025-08-30";

    /// Branch that receives the generated history on push
    pub const BRANCH: &str = "main";

    /// Name of the append-only log file recording one line per commit
    pub const LOG_FILE: &str = "contributions.txt";
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "contribution-activity-simulator",
    version = "1.0.0",
    about = "Contribution Activity Simulator - Generates backdated commit history with realistic activity patterns",
    long_about = "Generates a multi-year commit history whose day-by-day activity mimics a real
contributor: slow start, gradual ramp-up, weekday/weekend rhythm, mid-month
bursts, and fixed break periods with no activity at all. Each simulated commit
appends one line to a log file and is committed with an explicitly backdated
author timestamp.

EXAMPLES:
    # Generate history locally with the default 2023-2025 range
    contribution-activity-simulator

    # Generate and push to a remote repository
    contribution-activity-simulator --repository https://github.com/user/repo.git

    # Reproducible schedule with a fixed seed
    contribution-activity-simulator --seed 42 --start-date 2024-01-01 --end-date 2024-12-31

    # Validate configuration without touching the repository
    contribution-activity-simulator --config config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Remote repository URL to push the generated history to
    #[arg(
        long,
        help = "Remote repository URL (optional)",
        long_help = "Remote repository URL. When omitted, history is generated locally and no remote is configured or pushed."
    )]
    pub repository: Option<String>,

    /// First day of the simulated range (YYYY-MM-DD)
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub start_date: Option<NaiveDate>,

    /// Last day of the simulated range, inclusive (YYYY-MM-DD)
    #[arg(long, help = "End date (YYYY-MM-DD), inclusive")]
    pub end_date: Option<NaiveDate>,

    /// Daily commit count policy
    #[arg(
        long,
        value_enum,
        help = "Daily commit count policy (tiered or curve)",
        long_help = "Policy for deriving the daily commit count. 'tiered' uses three progress bands with weekday and mid-month multipliers (0-15 commits); 'curve' uses a continuous growth curve (1-20 commits). Default: tiered"
    )]
    pub count_policy: Option<CountPolicy>,

    /// Branch to push the generated history to
    #[arg(long, help = "Branch to push to (default: main)")]
    pub branch: Option<String>,

    /// Name of the contribution log file
    #[arg(long, help = "Contribution log file name (default: contributions.txt)")]
    pub log_file: Option<String>,

    /// Directory holding the repository being written
    #[arg(long, help = "Working directory for the generated repository (default: current directory)")]
    pub work_dir: Option<String>,

    /// Random seed for reproducible schedules
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration and print the plan without running
    #[arg(long, help = "Validate configuration without generating any history")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Remote repository URL to push the generated history to
    pub repository: Option<String>,

    /// First day of the simulated range
    pub start_date: Option<NaiveDate>,

    /// Last day of the simulated range, inclusive
    pub end_date: Option<NaiveDate>,

    /// Daily commit count policy
    pub count_policy: Option<CountPolicy>,

    /// Branch to push the generated history to
    pub branch: Option<String>,

    /// Name of the contribution log file
    pub log_file: Option<String>,

    /// Directory holding the repository being written
    pub work_dir: Option<String>,

    /// Random seed for reproducible schedules
    pub seed: Option<u64>,
}

/// Configuration for the contribution activity simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Remote repository URL; when `None` no remote is configured or pushed
    pub repository: Option<String>,

    /// First day of the simulated range
    pub start_date: NaiveDate,

    /// Last day of the simulated range, inclusive
    pub end_date: NaiveDate,

    /// Daily commit count policy
    pub count_policy: CountPolicy,

    /// Branch to push the generated history to
    pub branch: String,

    /// Name of the contribution log file inside the working directory
    pub log_file: String,

    /// Directory holding the repository being written
    pub work_dir: String,

    /// Random seed for reproducible schedules
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// The configured range ends before it starts
    #[error("Invalid date range: start ({start}) must be on or before end ({end})")]
    InvalidDateRange {
        /// Configured start date
        start: NaiveDate,
        /// Configured end date
        end: NaiveDate,
    },

    /// Branch name is empty
    #[error("Branch name must not be empty")]
    EmptyBranch,

    /// Log file name is empty
    #[error("Log file name must not be empty")]
    EmptyLogFile,

    /// Working directory is empty
    #[error("Working directory must not be empty")]
    EmptyWorkDir,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // The default strings parse by construction; a failure here is a bug
        // in the `defaults` module itself.
        let start_date = defaults::START_DATE
            .parse()
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let end_date = defaults::END_DATE
            .parse()
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(2025, 8, 30).unwrap());

        Self {
            repository: None,
            start_date,
            end_date,
            count_policy: CountPolicy::default(),
            branch: defaults::BRANCH.to_string(),
            log_file: defaults::LOG_FILE.to_string(),
            work_dir: ".".to_string(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            repository: config_file.repository.or(defaults.repository),
            start_date: config_file.start_date.unwrap_or(defaults.start_date),
            end_date: config_file.end_date.unwrap_or(defaults.end_date),
            count_policy: config_file.count_policy.unwrap_or(defaults.count_policy),
            branch: config_file.branch.unwrap_or(defaults.branch),
            log_file: config_file.log_file.unwrap_or(defaults.log_file),
            work_dir: config_file.work_dir.unwrap_or(defaults.work_dir),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.repository {
            config.repository = Some(value);
        }
        if let Some(value) = args.start_date {
            config.start_date = value;
        }
        if let Some(value) = args.end_date {
            config.end_date = value;
        }
        if let Some(value) = args.count_policy {
            config.count_policy = value;
        }
        if let Some(value) = args.branch {
            config.branch = value;
        }
        if let Some(value) = args.log_file {
            config.log_file = value;
        }
        if let Some(value) = args.work_dir {
            config.work_dir = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Validate the date range ordering; everything downstream (progress
        // ratio, day iteration) assumes start <= end
        if self.start_date > self.end_date {
            return Err(ConfigValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.branch.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBranch);
        }

        if self.log_file.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogFile);
        }

        if self.work_dir.trim().is_empty() {
            return Err(ConfigValidationError::EmptyWorkDir);
        }

        Ok(())
    }

    /// Total number of days in the inclusive range (at least 1 for a valid config)
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
