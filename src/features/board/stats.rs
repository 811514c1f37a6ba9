//! Board statistics.
//!
//! Counts shown in the tiles above the task views.

use serde::{Deserialize, Serialize};

use super::list::Task;

/// Summary counts for a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    /// All tasks on the board.
    pub total: usize,
    /// Tasks not yet completed.
    pub pending: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Pending P1 tasks.
    pub urgent: usize,
}

impl BoardStats {
    /// Calculate stats from a slice of tasks.
    #[must_use]
    pub fn calculate(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
            urgent: tasks.iter().filter(|t| t.is_urgent()).count(),
        }
    }

    /// Labelled values for the stats tiles, in display order.
    #[must_use]
    pub const fn tiles(&self) -> [(&'static str, usize); 3] {
        [
            ("Total Tasks", self.total),
            ("Pending", self.pending),
            ("Completed", self.completed),
        ]
    }
}
