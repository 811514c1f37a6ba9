//! Configuration management for taskflow.
//!
//! This module handles loading and saving configuration from `~/.taskflow/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{BoardConfig, ColorSetting, Config, GeneralConfig, LoggingConfig};
