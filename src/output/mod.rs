//! Output formatting for taskflow.
//!
//! This module provides formatters for displaying parsed tasks, task records
//! and the board in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TaskflowError;
use crate::features::board::{Task, TaskList, ViewMode};
use crate::features::nlp::ParsedTask;

pub use json::*;
pub use pretty::*;

/// Format a parse result based on output format
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn format_parsed_task(task: &ParsedTask, format: OutputFormat) -> Result<String, TaskflowError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_task_pretty(task)),
        OutputFormat::Json => format_parsed_task_json(task),
    }
}

/// Format a single task record based on output format
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, TaskflowError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format the board based on output format
///
/// # Errors
///
/// Returns `TaskflowError::Parse` if JSON serialization fails.
pub fn format_board(
    list: &TaskList,
    view: ViewMode,
    format: OutputFormat,
) -> Result<String, TaskflowError> {
    match format {
        OutputFormat::Pretty => Ok(format_board_pretty(list, view)),
        OutputFormat::Json => format_board_json(list, view),
    }
}
