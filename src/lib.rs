//! taskflow - natural-language task capture
//!
//! This crate turns one-line task descriptions into structured tasks (name,
//! assignee, due date, due time, priority) and keeps them on an in-memory
//! board with completion tracking and two views.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskflowError;
pub use features::board::TaskList;
pub use features::nlp::{parse_task, parse_task_on, ParsedTask, Priority};
