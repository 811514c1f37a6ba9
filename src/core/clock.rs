//! Source of "now" for the board and the CLI.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Provides the current date and time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The local calendar date used to resolve "today" and "tomorrow".
    fn today(&self) -> NaiveDate;

    /// Timestamp stamped on newly created tasks.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one date, used by `--today`.
///
/// Creation timestamps are midnight UTC of that date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.today.and_time(chrono::NaiveTime::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!(
            clock.now_utc().to_rfc3339(),
            "2025-06-20T00:00:00+00:00"
        );
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let clock = SystemClock;
        let before = Local::now().date_naive();
        let today = clock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
