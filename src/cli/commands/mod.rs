//! Command implementations for taskflow.
//!
//! Each handler returns the rendered output; `main` prints it.

mod board;
mod completions;
mod config;
mod parse;

pub use board::{board, build_board, read_descriptions};
pub use completions::completions;
pub use config::config;
pub use parse::{add, parse};
