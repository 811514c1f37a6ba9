//! The `board` command.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::debug;

use crate::cli::args::{BoardArgs, OutputFormat};
use crate::core::Clock;
use crate::error::TaskflowError;
use crate::features::board::{TaskEdit, TaskList, ViewMode};
use crate::output::format_board;

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, an id passed to `--edit`,
/// `--complete` or `--delete` does not exist, an edit is rejected, or output
/// formatting fails.
pub fn board(
    args: &BoardArgs,
    view: ViewMode,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<String, TaskflowError> {
    let descriptions = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                TaskflowError::InvalidInput(format!("cannot open {}: {e}", path.display()))
            })?;
            read_descriptions(BufReader::new(file))?
        }
        None => read_descriptions(io::stdin().lock())?,
    };

    let list = build_board(&descriptions, clock, &args.edit, &args.complete, &args.delete)?;
    format_board(&list, view, format)
}

/// Read one description per line, skipping blank lines and `#` comments.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_descriptions<R: BufRead>(reader: R) -> Result<Vec<String>, TaskflowError> {
    let mut descriptions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        descriptions.push(line.to_string());
    }
    debug!(count = descriptions.len(), "read task descriptions");
    Ok(descriptions)
}

/// Capture every description, then apply field edits, completion toggles
/// and deletions, in that order.
///
/// # Errors
///
/// Returns `TaskflowError::NotFound` if an id does not exist, or
/// `TaskflowError::InvalidInput` if an edit blanks a name or assignee.
pub fn build_board(
    descriptions: &[String],
    clock: &dyn Clock,
    edits: &[(u64, TaskEdit)],
    complete: &[u64],
    delete: &[u64],
) -> Result<TaskList, TaskflowError> {
    let mut list = TaskList::new();
    for text in descriptions {
        list.capture(text, clock);
    }
    for (id, edit) in edits {
        list.edit(*id, edit.clone())?;
    }
    for &id in complete {
        list.toggle(id)?;
    }
    for &id in delete {
        list.remove(id)?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::features::nlp::Priority;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap())
    }

    const INPUT: &str = "# weekly list
Call client Rajeev tomorrow 5pm P1

   Finish landing page Aman by 11pm 20th June
Water plants P4
";

    #[test]
    fn test_read_descriptions_skips_blank_and_comments() {
        let lines = read_descriptions(Cursor::new(INPUT)).unwrap();
        assert_eq!(
            lines,
            vec![
                "Call client Rajeev tomorrow 5pm P1",
                "Finish landing page Aman by 11pm 20th June",
                "Water plants P4",
            ]
        );
    }

    #[test]
    fn test_build_board_applies_toggles_and_deletes() {
        let lines = read_descriptions(Cursor::new(INPUT)).unwrap();
        let list = build_board(&lines, &clock(), &[], &[1, 3], &[2]).unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.get(1).unwrap().completed);
        assert!(list.get(3).unwrap().completed);
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_build_board_toggle_twice() {
        let lines = vec!["Water plants".to_string()];
        let list = build_board(&lines, &clock(), &[], &[1, 1], &[]).unwrap();
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn test_build_board_applies_edits() {
        let lines = read_descriptions(Cursor::new(INPUT)).unwrap();
        let edits = vec![
            (1, TaskEdit::field("assignee", "Rajeev").unwrap()),
            (1, TaskEdit::field("priority", "P2").unwrap()),
            (3, TaskEdit::field("date", "2025-07-01").unwrap()),
        ];
        let list = build_board(&lines, &clock(), &edits, &[], &[]).unwrap();

        let first = list.get(1).unwrap();
        assert_eq!(first.assignee, "Rajeev");
        assert_eq!(first.priority, Priority::P2);
        assert_eq!(first.name, "Call client Rajeev");
        assert_eq!(
            list.get(3).unwrap().due_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert_eq!(list.urgent().count(), 0);
    }

    #[test]
    fn test_build_board_rejects_blank_edit() {
        let lines = vec!["Water plants".to_string()];
        let edits = vec![(1, TaskEdit::field("name", "  ").unwrap())];
        let err = build_board(&lines, &clock(), &edits, &[], &[]).unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidInput(_)));
    }

    #[test]
    fn test_build_board_unknown_id() {
        let lines = vec!["Water plants".to_string()];
        let err = build_board(&lines, &clock(), &[], &[5], &[]).unwrap_err();
        assert!(matches!(err, TaskflowError::NotFound(_)));
    }

    #[test]
    fn test_board_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        std::fs::write(&path, INPUT).unwrap();

        let args = BoardArgs {
            file: Some(path),
            view: None,
            edit: vec![],
            complete: vec![],
            delete: vec![],
        };
        let output = board(&args, ViewMode::Table, &clock(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["view"], "table");
        assert_eq!(value["count"], 3);
        assert_eq!(value["items"][1]["assignee"], "Aman");
    }

    #[test]
    fn test_board_missing_file() {
        let args = BoardArgs {
            file: Some("/nonexistent/taskflow/tasks.txt".into()),
            view: None,
            edit: vec![],
            complete: vec![],
            delete: vec![],
        };
        let err = board(&args, ViewMode::Cards, &clock(), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidInput(_)));
    }
}
