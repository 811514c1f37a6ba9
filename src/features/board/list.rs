//! In-memory task list.
//!
//! Turns parsed descriptions into task records (id, creation time,
//! completion flag) and supports the edits the board offers: toggling,
//! field edits and deletion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Clock, DueTime};
use crate::error::TaskflowError;
use crate::features::nlp::{parse_task_on, ParsedTask, Priority};

/// A task stored on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub due_time: DueTime,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a fresh, not yet completed record from a parse result.
    #[must_use]
    pub fn from_parsed(id: u64, parsed: ParsedTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: parsed.name,
            assignee: parsed.assignee,
            due_date: parsed.due_date,
            due_time: parsed.due_time,
            priority: parsed.priority,
            completed: false,
            created_at,
        }
    }

    /// Pending P1 task.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        !self.completed && self.priority.is_urgent()
    }
}

/// Field changes applied by [`TaskList::edit`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub name: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<DueTime>,
    pub priority: Option<Priority>,
}

impl TaskEdit {
    /// Edit of a single field, as in `priority=P1` or `date=2025-07-01`.
    ///
    /// Fields are `name`, `assignee`, `date` (`YYYY-MM-DD`), `time`
    /// (`5pm`, `17:30`) and `priority` (`P1`-`P4`).
    ///
    /// # Errors
    ///
    /// Returns `TaskflowError::InvalidInput` for an unknown field or a value
    /// that does not parse.
    pub fn field(field: &str, value: &str) -> Result<Self, TaskflowError> {
        let mut edit = Self::default();
        match field.trim().to_lowercase().as_str() {
            "name" => edit.name = Some(value.to_string()),
            "assignee" => edit.assignee = Some(value.to_string()),
            "date" => {
                let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
                    TaskflowError::InvalidInput(format!("invalid date {value:?}: {e}"))
                })?;
                edit.due_date = Some(date);
            }
            "time" => edit.due_time = Some(value.parse()?),
            "priority" => edit.priority = Some(value.trim().parse()?),
            other => {
                return Err(TaskflowError::InvalidInput(format!(
                    "unknown field {other:?} (expected name, assignee, date, time or priority)"
                )))
            }
        }
        Ok(edit)
    }
}

/// Ordered collection of tasks with board-assigned ids.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: u64,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and add the result to the list.
    pub fn capture(&mut self, text: &str, clock: &dyn Clock) -> &Task {
        let parsed = parse_task_on(text, clock.today());
        self.insert(parsed, clock.now_utc())
    }

    /// Add a parsed task, assigning the next id.
    ///
    /// Ids start at 1 and are never reused, even after deletions.
    pub fn insert(&mut self, parsed: ParsedTask, created_at: DateTime<Utc>) -> &Task {
        self.last_id += 1;
        let task = Task::from_parsed(self.last_id, parsed, created_at);
        info!(id = task.id, name = %task.name, "task added");
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task, TaskflowError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskflowError::task_not_found(id))
    }

    /// Apply field edits to a task.
    ///
    /// # Errors
    ///
    /// Returns `TaskflowError::NotFound` for an unknown id, or
    /// `TaskflowError::InvalidInput` if a name or assignee edit is blank.
    pub fn edit(&mut self, id: u64, edit: TaskEdit) -> Result<&Task, TaskflowError> {
        let name = non_blank("name", edit.name)?;
        let assignee = non_blank("assignee", edit.assignee)?;
        let task = self.get_mut(id)?;

        if let Some(name) = name {
            task.name = name;
        }
        if let Some(assignee) = assignee {
            task.assignee = assignee;
        }
        if let Some(date) = edit.due_date {
            task.due_date = date;
        }
        if let Some(time) = edit.due_time {
            task.due_time = time;
        }
        if let Some(priority) = edit.priority {
            task.priority = priority;
        }

        debug!(id, "task edited");
        Ok(task)
    }

    /// Flip the completion flag, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns `TaskflowError::NotFound` if no task has that id.
    pub fn toggle(&mut self, id: u64) -> Result<bool, TaskflowError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task toggled");
        Ok(task.completed)
    }

    /// Delete a task, returning it.
    ///
    /// # Errors
    ///
    /// Returns `TaskflowError::NotFound` if no task has that id.
    pub fn remove(&mut self, id: u64) -> Result<Task, TaskflowError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskflowError::task_not_found(id))?;
        debug!(id, "task removed");
        Ok(self.tasks.remove(index))
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    /// Pending P1 tasks.
    pub fn urgent(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_urgent())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>, TaskflowError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(TaskflowError::InvalidInput(format!(
            "{field} cannot be empty"
        ))),
        Some(v) => Ok(Some(v.trim().to_string())),
        None => Ok(None),
    }
}
