//! Fixed blackout calendar
//!
//! Break periods during which no activity is generated. The windows are
//! hard-coded by design: they model specific real-world gaps (vacations,
//! leave) rather than a configurable policy.

use chrono::{Datelike, NaiveDate};

/// A contiguous run of days within a single month that generates no activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackoutWindow {
    /// Calendar year of the window
    pub year: i32,
    /// Calendar month of the window (1-12)
    pub month: u32,
    /// First excluded day of the month
    pub from_day: u32,
    /// Last excluded day of the month (inclusive; 31 covers whole months)
    pub to_day: u32,
}

impl BlackoutWindow {
    /// Window covering an entire month
    pub const fn full_month(year: i32, month: u32) -> Self {
        Self { year, month, from_day: 1, to_day: 31 }
    }

    /// Window covering part of a month, from `from_day` through `to_day` inclusive
    pub const fn days(year: i32, month: u32, from_day: u32, to_day: u32) -> Self {
        Self { year, month, from_day, to_day }
    }

    /// Check whether the given date falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
            && date.month() == self.month
            && date.day() >= self.from_day
            && date.day() <= self.to_day
    }
}

/// The fixed set of break periods for the simulated contributor
///
/// February 2025 is excluded in full: the source policy described it as "first
/// and last 15 days", which for a 28-day month is every day of the month.
#[derive(Debug, Clone)]
pub struct BlackoutCalendar {
    windows: Vec<BlackoutWindow>,
}

impl BlackoutCalendar {
    /// Build the standard blackout calendar
    pub fn standard() -> Self {
        Self {
            windows: vec![
                // 2023: no contributions in March and April
                BlackoutWindow::full_month(2023, 3),
                BlackoutWindow::full_month(2023, 4),
                // 2024: no contributions in April, May, and the last 15 days of December
                BlackoutWindow::full_month(2024, 4),
                BlackoutWindow::full_month(2024, 5),
                BlackoutWindow::days(2024, 12, 16, 31),
                // 2025: no contributions in February
                BlackoutWindow::full_month(2025, 2),
            ],
        }
    }

    /// Build a calendar from an explicit window list (used by tests)
    pub fn with_windows(windows: Vec<BlackoutWindow>) -> Self {
        Self { windows }
    }

    /// True if the date falls inside any break period
    pub fn is_blackout(&self, date: NaiveDate) -> bool {
        self.windows.iter().any(|window| window.contains(date))
    }

    /// The configured windows, for plan summaries
    pub fn windows(&self) -> &[BlackoutWindow] {
        &self.windows
    }

    /// Human-readable description of each break period
    pub fn describe(&self) -> Vec<String> {
        self.windows
            .iter()
            .map(|w| {
                if w.from_day == 1 && w.to_day >= 28 {
                    format!("{}-{:02}: whole month", w.year, w.month)
                } else {
                    format!("{}-{:02}: days {}-{}", w.year, w.month, w.from_day, w.to_day)
                }
            })
            .collect()
    }
}

impl Default for BlackoutCalendar {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_spring_2023_excluded() {
        let calendar = BlackoutCalendar::standard();

        assert!(calendar.is_blackout(date(2023, 3, 1)));
        assert!(calendar.is_blackout(date(2023, 3, 15)));
        assert!(calendar.is_blackout(date(2023, 4, 30)));
        // Adjacent months are active
        assert!(!calendar.is_blackout(date(2023, 2, 28)));
        assert!(!calendar.is_blackout(date(2023, 5, 1)));
    }

    #[test]
    fn test_2024_windows() {
        let calendar = BlackoutCalendar::standard();

        assert!(calendar.is_blackout(date(2024, 4, 10)));
        assert!(calendar.is_blackout(date(2024, 5, 31)));
        assert!(!calendar.is_blackout(date(2024, 3, 31)));
        assert!(!calendar.is_blackout(date(2024, 6, 1)));
    }

    #[test]
    fn test_december_2024_boundary() {
        let calendar = BlackoutCalendar::standard();

        // Only days 16 and later are excluded
        assert!(!calendar.is_blackout(date(2024, 12, 15)));
        assert!(calendar.is_blackout(date(2024, 12, 16)));
        assert!(calendar.is_blackout(date(2024, 12, 31)));
    }

    #[test]
    fn test_february_2025_fully_excluded() {
        let calendar = BlackoutCalendar::standard();

        for day in 1..=28 {
            assert!(calendar.is_blackout(date(2025, 2, day)), "2025-02-{:02} should be excluded", day);
        }
        assert!(!calendar.is_blackout(date(2025, 1, 31)));
        assert!(!calendar.is_blackout(date(2025, 3, 1)));
    }

    #[test]
    fn test_same_month_other_year_not_excluded() {
        let calendar = BlackoutCalendar::standard();

        // Windows are year-specific
        assert!(!calendar.is_blackout(date(2024, 3, 15)));
        assert!(!calendar.is_blackout(date(2023, 12, 20)));
        assert!(!calendar.is_blackout(date(2024, 2, 10)));
    }

    #[test]
    fn test_window_contains() {
        let window = BlackoutWindow::days(2024, 12, 16, 31);

        assert!(window.contains(date(2024, 12, 16)));
        assert!(window.contains(date(2024, 12, 25)));
        assert!(!window.contains(date(2024, 12, 15)));
        assert!(!window.contains(date(2024, 11, 20)));
        assert!(!window.contains(date(2023, 12, 20)));
    }

    #[test]
    fn test_custom_calendar() {
        let calendar = BlackoutCalendar::with_windows(vec![BlackoutWindow::full_month(2030, 7)]);

        assert!(calendar.is_blackout(date(2030, 7, 4)));
        assert!(!calendar.is_blackout(date(2030, 8, 4)));
        assert_eq!(calendar.windows().len(), 1);
    }

    #[test]
    fn test_describe() {
        let calendar = BlackoutCalendar::standard();
        let descriptions = calendar.describe();

        assert_eq!(descriptions.len(), 6);
        assert!(descriptions[0].contains("2023-03"));
        assert!(descriptions.iter().any(|d| d.contains("days 16-31")));
    }
}
