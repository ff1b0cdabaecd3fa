//! Core types and configuration for the contribution activity simulator
//!
//! This module contains the fundamental types and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! The types module provides the foundational data types for the simulation:
//!
//! - **Enums**: Type-safe enumerations for the commit count policy
//! - **Configuration**: Simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use amzn_contribution_activity_rust::types::*;
//! use chrono::NaiveDate;
//!
//! // Configure a simulation
//! let config = SimulationConfig {
//!     start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
//!     count_policy: CountPolicy::Tiered,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
