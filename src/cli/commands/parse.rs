//! The `parse` and `add` commands.

use crate::cli::args::{OutputFormat, TextArgs};
use crate::core::Clock;
use crate::error::TaskflowError;
use crate::features::board::TaskList;
use crate::features::nlp::parse_task_on;
use crate::output::{format_parsed_task, format_task};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(
    args: &TextArgs,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, TaskflowError> {
    let task = parse_task_on(&args.joined(), clock.today());
    format_parsed_task(&task, format)
}

/// Execute the add command: capture the description into a fresh board and
/// show the stored record.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn add(
    args: &TextArgs,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, TaskflowError> {
    let mut list = TaskList::new();
    let task = list.capture(&args.joined(), clock);
    format_task(task, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap())
    }

    fn text(s: &str) -> TextArgs {
        TextArgs {
            text: s.split(' ').map(String::from).collect(),
        }
    }

    #[test]
    fn test_parse_json() {
        let output = parse(
            &text("Submit report by Friday 20th June P2"),
            &clock(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "Submit report");
        assert_eq!(value["assignee"], "Friday");
        assert_eq!(value["dueDate"], "2025-06-20");
        assert_eq!(value["priority"], "P2");
    }

    #[test]
    fn test_add_json() {
        let output = add(&text("Water plants tomorrow 7am"), &clock(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Water plants");
        assert_eq!(value["dueDate"], "2025-06-21");
        assert_eq!(value["dueTime"], "7:00 AM");
        assert_eq!(value["completed"], false);
        assert_eq!(value["createdAt"], "2025-06-20T00:00:00Z");
    }
}
