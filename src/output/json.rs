//! JSON output formatting for taskflow.

use serde::Serialize;
use serde_json::json;

use crate::error::TaskflowError;
use crate::features::board::{BoardStats, Task, TaskList, ViewMode};
use crate::features::nlp::ParsedTask;

/// Format a parse result as JSON
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn format_parsed_task_json(task: &ParsedTask) -> Result<String, TaskflowError> {
    to_json(task)
}

/// Format a single task record as JSON
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TaskflowError> {
    to_json(task)
}

/// Format the board (stats plus every task) as JSON
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn format_board_json(list: &TaskList, view: ViewMode) -> Result<String, TaskflowError> {
    let output = json!({
        "view": view,
        "stats": BoardStats::calculate(list.tasks()),
        "count": list.len(),
        "items": list.tasks(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskflowError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::features::nlp::parse_task_on;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn test_format_parsed_task_json() {
        let task = parse_task_on("Finish report tomorrow", today());
        let result = format_parsed_task_json(&task).unwrap();
        assert!(result.contains("\"name\": \"Finish report\""));
        assert!(result.contains("\"dueDate\": \"2025-06-21\""));
        assert!(result.contains("\"dueTime\": \"9:00 AM\""));
        assert!(result.contains("\"priority\": \"P3\""));
    }

    #[test]
    fn test_format_board_json() {
        let clock = FixedClock::new(today());
        let mut list = TaskList::new();
        list.capture("Call client Rajeev tomorrow 5pm P1", &clock);
        list.capture("Water plants", &clock);
        list.toggle(2).unwrap();

        let result = format_board_json(&list, ViewMode::Table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["view"], "table");
        assert_eq!(value["count"], 2);
        assert_eq!(value["stats"]["total"], 2);
        assert_eq!(value["stats"]["completed"], 1);
        assert_eq!(value["stats"]["urgent"], 1);
        assert_eq!(value["items"][0]["name"], "Call client Rajeev");
        assert_eq!(value["items"][1]["completed"], true);
    }

    #[test]
    fn test_format_empty_board_json() {
        let result = format_board_json(&TaskList::new(), ViewMode::Cards).unwrap();
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }
}
