//! Activity schedule generation
//!
//! This module is the decision-making core of the simulator. Given a calendar
//! date and the overall configured range it decides:
//!
//! - **BlackoutCalendar**: whether the day falls into a fixed break period
//! - **Daily count**: how many commits the day receives, scaled by the date's
//!   progress through the range plus weekday/mid-month/jitter multipliers
//! - **Time of day**: the hour and minute stamped onto each individual commit
//!
//! All randomized functions take an injected [`rand::Rng`] so a seeded
//! generator reproduces the exact same schedule.

pub mod blackout;
pub mod daily_count;
pub mod time_of_day;

// Re-export all public types for convenience
pub use blackout::*;
pub use daily_count::*;
pub use time_of_day::*;
