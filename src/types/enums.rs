//! Enumeration types for the contribution activity simulator

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy used to derive the number of commits for a given day
///
/// Both policies scale activity with the date's position inside the overall
/// range, so early dates produce little activity and late dates produce a lot.
/// They differ in shape: `Tiered` jumps between three discrete activity bands
/// and layers weekday/weekend and mid-month multipliers on top, while `Curve`
/// follows a single continuous growth curve with one jitter factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Three progress tiers (0-2, 1-5, 3-12 base commits) with weekday,
    /// mid-month, and jitter multipliers; final count clamped to 0-15
    Tiered,
    /// Continuous exponential growth (progress^1.5) with a single jitter
    /// multiplier; final count clamped to 1-20
    Curve,
}

impl Default for CountPolicy {
    fn default() -> Self {
        CountPolicy::Tiered
    }
}

impl fmt::Display for CountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountPolicy::Tiered => write!(f, "tiered"),
            CountPolicy::Curve => write!(f, "curve"),
        }
    }
}

impl CountPolicy {
    /// Inclusive bounds the daily commit count is clamped to under this policy
    pub fn count_bounds(&self) -> (u32, u32) {
        match self {
            CountPolicy::Tiered => (0, 15),
            CountPolicy::Curve => (1, 20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_policy_default() {
        assert_eq!(CountPolicy::default(), CountPolicy::Tiered);
    }

    #[test]
    fn test_count_policy_display() {
        assert_eq!(CountPolicy::Tiered.to_string(), "tiered");
        assert_eq!(CountPolicy::Curve.to_string(), "curve");
    }

    #[test]
    fn test_count_policy_bounds() {
        assert_eq!(CountPolicy::Tiered.count_bounds(), (0, 15));
        assert_eq!(CountPolicy::Curve.count_bounds(), (1, 20));
    }

    #[test]
    fn test_count_policy_serialization() {
        let json = serde_json::to_string(&CountPolicy::Tiered).unwrap();
        assert_eq!(json, "\"tiered\"");

        let deserialized: CountPolicy = serde_json::from_str("\"curve\"").unwrap();
        assert_eq!(deserialized, CountPolicy::Curve);
    }
}
