//! Integration tests for CLI argument parsing and configuration resolution

use amzn_contribution_activity_rust::types::{CliArgs, CountPolicy, SimulationConfig};
use chrono::NaiveDate;
use clap::Parser;

#[test]
fn defaults_apply_when_no_flags_given() {
    let args = CliArgs::try_parse_from(["simulator"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();

    assert!(config.repository.is_none());
    assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2025, 8, 30).unwrap());
    assert_eq!(config.count_policy, CountPolicy::Tiered);
    assert_eq!(config.branch, "main");
    assert!(config.seed.is_none());
}

#[test]
fn all_flags_parse() {
    let args = CliArgs::try_parse_from([
        "simulator",
        "--repository",
        "https://github.com/user/repo.git",
        "--start-date",
        "2024-01-01",
        "--end-date",
        "2024-06-30",
        "--count-policy",
        "curve",
        "--branch",
        "trunk",
        "--log-file",
        "activity.txt",
        "--work-dir",
        "/tmp/history",
        "--seed",
        "42",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(args.repository.as_deref(), Some("https://github.com/user/repo.git"));
    assert_eq!(args.count_policy, Some(CountPolicy::Curve));
    assert_eq!(args.branch.as_deref(), Some("trunk"));
    assert_eq!(args.log_file.as_deref(), Some("activity.txt"));
    assert_eq!(args.work_dir.as_deref(), Some("/tmp/history"));
    assert_eq!(args.seed, Some(42));
    assert!(args.verbose);
    assert!(!args.debug);
    assert!(!args.dry_run);

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    assert!(config.validate().is_ok());
}

#[test]
fn invalid_count_policy_is_rejected() {
    let result = CliArgs::try_parse_from(["simulator", "--count-policy", "bursty"]);
    assert!(result.is_err());
}

#[test]
fn invalid_date_is_rejected_at_parse_time() {
    let result = CliArgs::try_parse_from(["simulator", "--end-date", "2024-13-01"]);
    assert!(result.is_err());
}

#[test]
fn special_flags_parse() {
    let args = CliArgs::try_parse_from(["simulator", "--dry-run", "--print-config"]).unwrap();
    assert!(args.dry_run);
    assert!(args.print_config);
}

#[test]
fn reversed_range_fails_validation_not_parsing() {
    let args = CliArgs::try_parse_from([
        "simulator",
        "--start-date",
        "2024-06-30",
        "--end-date",
        "2024-01-01",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn config_file_and_cli_merge() {
    use std::io::Write;

    let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    temp_file
        .write_all(br#"{"count_policy": "curve", "seed": 100, "branch": "history"}"#)
        .unwrap();
    temp_file.flush().unwrap();

    let args = CliArgs::try_parse_from([
        "simulator",
        "--config",
        &temp_file.path().display().to_string(),
        "--seed",
        "200",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(args).unwrap();
    // CLI wins where both are present; file fills in the rest
    assert_eq!(config.seed, Some(200));
    assert_eq!(config.count_policy, CountPolicy::Curve);
    assert_eq!(config.branch, "history");
}

#[test]
fn print_config_json_round_trips() {
    let config = SimulationConfig::default();
    let json = config.print_json().unwrap();
    let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.start_date, config.start_date);
    assert_eq!(parsed.count_policy, config.count_policy);
}
