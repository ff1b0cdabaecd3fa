//! Time-of-day sampling for individual commits
//!
//! Commits are not spread uniformly over the day: most land in working hours,
//! a smaller share in the evening, and a thin tail shortly after midnight.

use rand::Rng;

/// Probability that a commit falls into the daytime window
const DAYTIME_WEIGHT: f64 = 0.6;

/// Cumulative probability covering daytime plus evening; the remainder is late night
const EVENING_WEIGHT_CUMULATIVE: f64 = 0.9;

/// Daytime hour window (9 AM - 6 PM, inclusive)
const DAYTIME_HOURS: (u32, u32) = (9, 18);

/// Evening hour window (6 PM - 11 PM, inclusive)
const EVENING_HOURS: (u32, u32) = (18, 23);

/// Late-night hour window (midnight - 2 AM, inclusive)
const LATE_NIGHT_HOURS: (u32, u32) = (0, 2);

/// Draw an (hour, minute) pair for a single commit
///
/// 60% of draws land in 9-18h, 30% in 18-23h, and 10% in 0-2h; the minute is
/// uniform. The late-night window starts at midnight rather than wrapping
/// around 23h, so every range handed to the sampler is well-formed.
pub fn sample_commit_time<R: Rng>(rng: &mut R) -> (u32, u32) {
    let choice: f64 = rng.gen();
    let hour = if choice < DAYTIME_WEIGHT {
        rng.gen_range(DAYTIME_HOURS.0..=DAYTIME_HOURS.1)
    } else if choice < EVENING_WEIGHT_CUMULATIVE {
        rng.gen_range(EVENING_HOURS.0..=EVENING_HOURS.1)
    } else {
        rng.gen_range(LATE_NIGHT_HOURS.0..=LATE_NIGHT_HOURS.1)
    };
    let minute = rng.gen_range(0..=59);
    (hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_any_window(hour: u32) -> bool {
        (9..=18).contains(&hour) || (18..=23).contains(&hour) || hour <= 2
    }

    #[test]
    fn test_sampled_times_within_windows() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10_000 {
            let (hour, minute) = sample_commit_time(&mut rng);
            assert!(in_any_window(hour), "hour {} outside all windows", hour);
            assert!(minute <= 59);
        }
    }

    #[test]
    fn test_all_windows_reachable() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut daytime = 0usize;
        let mut evening = 0usize;
        let mut late_night = 0usize;

        for _ in 0..10_000 {
            let (hour, _) = sample_commit_time(&mut rng);
            if hour <= 2 {
                late_night += 1;
            } else if hour < 18 {
                daytime += 1;
            } else {
                evening += 1;
            }
        }

        assert!(daytime > 0, "daytime window never sampled");
        assert!(evening > 0, "evening window never sampled");
        assert!(late_night > 0, "late-night window never sampled");
        // Daytime must dominate given its 60% weight
        assert!(daytime > evening && daytime > late_night);
    }

    #[test]
    fn test_sampling_reproducible_with_seed() {
        let mut first = StdRng::seed_from_u64(77);
        let mut second = StdRng::seed_from_u64(77);

        for _ in 0..100 {
            assert_eq!(sample_commit_time(&mut first), sample_commit_time(&mut second));
        }
    }

    #[test]
    fn test_hours_never_between_3_and_8() {
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..10_000 {
            let (hour, _) = sample_commit_time(&mut rng);
            assert!(!(3..=8).contains(&hour), "hour {} in the dead zone", hour);
        }
    }
}
