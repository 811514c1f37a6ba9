//! Board view modes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the board lists its tasks.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Pending and completed sections, plus an urgent section.
    #[default]
    Cards,
    /// One row per task.
    Table,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cards => "cards",
            Self::Table => "table",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cards() {
        assert_eq!(ViewMode::default(), ViewMode::Cards);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::Table).unwrap(), "\"table\"");
        let mode: ViewMode = serde_yaml::from_str("cards").unwrap();
        assert_eq!(mode, ViewMode::Cards);
    }
}
