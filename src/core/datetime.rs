//! Date and time fragment utilities.
//!
//! Helpers shared by the task parser and the renderers: the month-name
//! table, clock-time normalization into `H:MM AM|PM`, and the display
//! formats used by the card and table views.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TaskflowError;

/// Hours (without a meridiem) that are assumed to be in the evening.
///
/// This is a guess about intent: "call mom 8:00" most likely means 8 PM.
/// It misfires for genuine morning tasks written without "am".
const EVENING_HOURS: std::ops::RangeInclusive<u32> = 6..=11;

static TIME_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*$")
        .unwrap_or_else(|e| panic!("Invalid time parts regex: {e}"))
});

/// AM/PM designator of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        })
    }
}

/// A due time on a 12-hour clock, rendered as `H:MM AM|PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl DueTime {
    /// Build a time from 12-hour clock parts.
    ///
    /// Returns `None` unless `hour` is 1-12 and `minute` is 0-59.
    #[must_use]
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> Option<Self> {
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Hour on the 12-hour clock (1-12).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of the hour.
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// AM or PM.
    #[must_use]
    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }
}

impl Default for DueTime {
    /// 9:00 AM, the time given to tasks that don't mention one.
    fn default() -> Self {
        Self {
            hour: 9,
            minute: 0,
            meridiem: Meridiem::Am,
        }
    }
}

impl fmt::Display for DueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

impl FromStr for DueTime {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_time(s).ok_or_else(|| TaskflowError::InvalidInput(format!("invalid time: {s:?}")))
    }
}

impl Serialize for DueTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a captured clock fragment into a [`DueTime`].
///
/// Accepts `11pm`, `5:30 pm`, `14:00`, `8:15` and a bare hour like `8`.
/// With a meridiem, the hour must be 1-12. Without one, hours 6-11 are
/// taken as PM, other hours below 12 as AM and 12-23 as PM.
///
/// Returns `None` if the fragment is not a valid clock time.
#[must_use]
pub fn normalize_time(raw: &str) -> Option<DueTime> {
    let caps = TIME_PARTS.captures(raw)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(m) = caps.get(3) {
        let meridiem = if m.as_str().eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        };
        return DueTime::new(hour, minute, meridiem);
    }

    if hour > 23 {
        return None;
    }

    let meridiem = if EVENING_HOURS.contains(&hour) || hour >= 12 {
        Meridiem::Pm
    } else {
        Meridiem::Am
    };
    let hour = match hour {
        0 => 12,
        13..=23 => hour - 12,
        h => h,
    };

    DueTime::new(hour, minute, meridiem)
}

/// Map a month name to its number using the three-letter abbreviation.
///
/// `"Jun"`, `"june"` and `"JUNE"` all give 6.
#[must_use]
pub fn month_from_name(input: &str) -> Option<u32> {
    let prefix: String = input.chars().take(3).collect::<String>().to_lowercase();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Card view date, e.g. `Jun 21, 2025`.
#[must_use]
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Table view date and time, e.g. `5:00 PM, 21 June`.
#[must_use]
pub fn format_table_datetime(date: NaiveDate, time: DueTime) -> String {
    format!("{time}, {}", date.format("%d %B"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(raw: &str) -> String {
        normalize_time(raw).map(|t| t.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_normalize_with_meridiem() {
        assert_eq!(time("11pm"), "11:00 PM");
        assert_eq!(time("5:30 pm"), "5:30 PM");
        assert_eq!(time("7AM"), "7:00 AM");
        assert_eq!(time("12am"), "12:00 AM");
    }

    #[test]
    fn test_normalize_evening_heuristic() {
        assert_eq!(time("8"), "8:00 PM");
        assert_eq!(time("8:00"), "8:00 PM");
        assert_eq!(time("6:45"), "6:45 PM");
        assert_eq!(time("11:05"), "11:05 PM");
    }

    #[test]
    fn test_normalize_without_meridiem_outside_evening_range() {
        assert_eq!(time("5:00"), "5:00 AM");
        assert_eq!(time("0:30"), "12:30 AM");
        assert_eq!(time("12:00"), "12:00 PM");
        assert_eq!(time("15:00"), "3:00 PM");
        assert_eq!(time("23:59"), "11:59 PM");
    }

    #[test]
    fn test_normalize_rejects_invalid() {
        assert!(normalize_time("24:00").is_none());
        assert!(normalize_time("9:60").is_none());
        assert!(normalize_time("13pm").is_none());
        assert!(normalize_time("0am").is_none());
        assert!(normalize_time("soon").is_none());
        assert!(normalize_time("").is_none());
    }

    #[test]
    fn test_due_time_default() {
        assert_eq!(DueTime::default().to_string(), "9:00 AM");
    }

    #[test]
    fn test_due_time_from_str() {
        let parsed: DueTime = "9:00 AM".parse().unwrap();
        assert_eq!(parsed, DueTime::default());
        assert!("later".parse::<DueTime>().is_err());
    }

    #[test]
    fn test_due_time_serde() {
        let t = DueTime::new(2, 0, Meridiem::Pm).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"2:00 PM\"");
        let back: DueTime = serde_json::from_str("\"2:00 PM\"").unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(month_from_name("Jan"), Some(1));
        assert_eq!(month_from_name("june"), Some(6));
        assert_eq!(month_from_name("SEPTEMBER"), Some(9));
        assert_eq!(month_from_name("Dec"), Some(12));
        assert_eq!(month_from_name("Smarch"), None);
        assert_eq!(month_from_name("ju"), None);
    }

    #[test]
    fn test_display_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        let t = DueTime::new(5, 0, Meridiem::Pm).unwrap();
        assert_eq!(format_card_date(date), "Jun 21, 2025");
        assert_eq!(format_table_datetime(date, t), "5:00 PM, 21 June");
    }
}
