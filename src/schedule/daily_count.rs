//! Daily commit count derivation
//!
//! Maps a date's position inside the configured range to a commit count,
//! producing a naturally progressive pattern: a very quiet start, a moderate
//! middle, and a busy final stretch.

use crate::types::CountPolicy;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Progress tier boundaries for the tiered policy
mod tiers {
    /// Below this progress the day draws from the low-activity band
    pub const LOW_BAND_END: f64 = 0.3;

    /// Below this progress (and at or above `LOW_BAND_END`) the day draws
    /// from the moderate band; at or above it, the high band
    pub const MID_BAND_END: f64 = 0.7;
}

/// Curve policy constants
mod curve {
    /// Minimum base commits at progress 0
    pub const MIN_COMMITS: f64 = 1.0;

    /// Maximum base commits at progress 1
    pub const MAX_COMMITS: f64 = 15.0;

    /// Exponent shaping the growth curve (super-linear ramp-up)
    pub const GROWTH_EXPONENT: f64 = 1.5;
}

/// Hard ceiling for the tiered policy after all multipliers
const TIERED_MAX_COMMITS: u32 = 15;

/// Final clamp bounds for the curve policy
const CURVE_CLAMP: (u32, u32) = (1, 20);

/// Normalized position of `date` within the inclusive range, in [0, 1]
///
/// Returns 0.0 for a single-day range. The value is 0 at `start`, 1 at `end`,
/// and monotonically non-decreasing as the date advances.
pub fn progress_ratio(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> f64 {
    let total_days = (end - start).num_days();
    if total_days <= 0 {
        return 0.0;
    }
    let elapsed = (date - start).num_days();
    (elapsed as f64 / total_days as f64).clamp(0.0, 1.0)
}

/// Number of commits to generate for `date` under the given policy
///
/// Every call consumes random draws from `rng`; pass a seeded generator for a
/// reproducible schedule.
pub fn commits_for_day<R: Rng>(
    date: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    policy: CountPolicy,
    rng: &mut R,
) -> u32 {
    let progress = progress_ratio(date, start, end);
    match policy {
        CountPolicy::Tiered => tiered_count(date, progress, rng),
        CountPolicy::Curve => curve_count(progress, rng),
    }
}

/// Tiered policy: discrete activity bands plus weekday, mid-month, and jitter
/// multipliers, truncating to an integer after each multiplication step
fn tiered_count<R: Rng>(date: NaiveDate, progress: f64, rng: &mut R) -> u32 {
    let mut commits: u32 = if progress < tiers::LOW_BAND_END {
        rng.gen_range(0..=2)
    } else if progress < tiers::MID_BAND_END {
        rng.gen_range(1..=5)
    } else {
        rng.gen_range(3..=12)
    };

    // Weekly rhythm: busier on weekdays, quieter on weekends
    let is_weekday = date.weekday().number_from_monday() <= 5;
    let weekly_factor: f64 =
        if is_weekday { rng.gen_range(1.0..=1.5) } else { rng.gen_range(0.3..=0.8) };
    commits = (commits as f64 * weekly_factor) as u32;

    // Monthly rhythm: more active in the middle of the month
    if (5..=25).contains(&date.day()) {
        let monthly_boost: f64 = rng.gen_range(1.0..=1.3);
        commits = (commits as f64 * monthly_boost) as u32;
    }

    // General day-to-day variation
    let variation: f64 = rng.gen_range(0.5..=1.5);
    commits = (commits as f64 * variation) as u32;

    commits.min(TIERED_MAX_COMMITS)
}

/// Curve policy: continuous super-linear growth with one jitter multiplier
fn curve_count<R: Rng>(progress: f64, rng: &mut R) -> u32 {
    let base = curve::MIN_COMMITS
        + (curve::MAX_COMMITS - curve::MIN_COMMITS) * progress.powf(curve::GROWTH_EXPONENT);
    let jitter: f64 = rng.gen_range(0.7..=1.3);
    let (min, max) = CURVE_CLAMP;
    ((base * jitter) as u32).clamp(min, max)
}
