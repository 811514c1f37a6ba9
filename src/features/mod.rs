//! Feature implementations for taskflow.
//!
//! This module contains:
//! - Natural language parsing of task descriptions
//! - The in-memory task board

pub mod board;
pub mod nlp;
