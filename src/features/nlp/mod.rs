//! Natural language parsing for task entry.
//!
//! This module provides parsing for natural language task input like:
//! - "Call client Rajeev tomorrow 5pm P1"
//! - "Finish landing page Aman by 11pm 20th June"
//! - "Submit report to Priya 20/07/2025 10:30am P2"

mod parser;

pub use parser::{
    clean_name, parse_task, parse_task_on, ParsedTask, Priority, DEFAULT_ASSIGNEE, DEFAULT_NAME,
};
