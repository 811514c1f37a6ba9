//! The task board.
//!
//! Holds the task records produced from parsed descriptions, the summary
//! statistics and the view mode used to render them.

mod list;
mod stats;
mod view;

pub use list::{Task, TaskEdit, TaskList};
pub use stats::BoardStats;
pub use view::ViewMode;
