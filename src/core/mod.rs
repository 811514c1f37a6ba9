//! Core abstractions for taskflow.
//!
//! This module provides the clock and the date/time helpers shared across
//! features.

mod clock;
mod datetime;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{
    format_card_date, format_table_datetime, month_from_name, normalize_time, DueTime, Meridiem,
};
