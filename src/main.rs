// Contribution Activity Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/amzn-contribution-activity-rust
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/amzn-contribution-activity-rust \
//       --repository https://github.com/user/repo.git --seed 42 --verbose
// ```

use amzn_contribution_activity_rust::history::GitHistoryWriter;
use amzn_contribution_activity_rust::schedule::BlackoutCalendar;
use amzn_contribution_activity_rust::simulation::{
    LoggingConfig, RunStatistics, SimulationOrchestrator,
};
use amzn_contribution_activity_rust::types::{CliArgs, SimulationConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Contribution Activity Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no history will be generated.");
        print_plan_summary(&config);
        return;
    }

    print_startup_banner(&config);

    // Run the simulation against the real git history writer
    let writer = GitHistoryWriter::new(&config.work_dir);
    let mut orchestrator = match SimulationOrchestrator::new(config, writer) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!("Failed to initialize simulation: {}", e);
            process::exit(1);
        }
    };

    let statistics = match orchestrator.run() {
        Ok(statistics) => statistics,
        Err(e) => {
            error!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    print_final_statistics(&statistics);
    info!("Contribution Activity Simulator completed successfully");
}

/// Print startup banner and plan summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Contribution Activity Simulator");
    eprintln!("===============================");
    eprintln!("Generates backdated commit history with a natural activity pattern");
    eprintln!();

    print_plan_summary(config);
}

/// Print the plan derived from the configuration
fn print_plan_summary(config: &SimulationConfig) {
    eprintln!("Plan:");
    eprintln!("  Date Range: {} through {} ({} days)", config.start_date, config.end_date, config.total_days());
    eprintln!("  Count Policy: {}", config.count_policy);
    eprintln!("  Working Directory: {}", config.work_dir);
    eprintln!("  Log File: {}", config.log_file);
    match &config.repository {
        Some(url) => eprintln!("  Repository: {} (branch {})", url, config.branch),
        None => eprintln!("  Repository: none (local history only)"),
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }

    eprintln!("  Break Periods:");
    for description in BlackoutCalendar::standard().describe() {
        eprintln!("    - {}", description);
    }
    eprintln!();
}

/// Print final run statistics
fn print_final_statistics(statistics: &RunStatistics) {
    eprintln!();
    eprintln!("{}", statistics.summary());
}
