//! The `config` command.

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::TaskflowError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file already exists (without `--force`),
/// cannot be written, or cannot be serialized.
pub fn config(
    paths: &Paths,
    current: &Config,
    cmd: &ConfigCommands,
) -> Result<String, TaskflowError> {
    match cmd {
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(TaskflowError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            Config::default().save(paths)?;
            Ok(format!(
                "Wrote default config to {}",
                paths.config_file.display()
            ))
        }
        ConfigCommands::Show => serde_yaml::to_string(current)
            .map_err(|e| TaskflowError::Config(format!("Failed to serialize config: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> Paths {
        Paths::with_root(dir.path().join(".taskflow"))
    }

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let output = config(&paths, &Config::default(), &ConfigCommands::Init { force: false })
            .unwrap();
        assert!(output.starts_with("Wrote default config to"));

        let written = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(written.general.default_output, OutputFormat::Pretty);
        assert_eq!(written.logging.level, "warn");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        std::fs::create_dir_all(&paths.root).unwrap();
        std::fs::write(&paths.config_file, "logging:\n  level: debug\n").unwrap();

        let err = config(&paths, &Config::default(), &ConfigCommands::Init { force: false })
            .unwrap_err();
        assert!(matches!(err, TaskflowError::InvalidInput(_)));
        assert_eq!(
            Config::load_from_path(&paths.config_file).unwrap().logging.level,
            "debug"
        );

        config(&paths, &Config::default(), &ConfigCommands::Init { force: true }).unwrap();
        assert_eq!(
            Config::load_from_path(&paths.config_file).unwrap().logging.level,
            "warn"
        );
    }

    #[test]
    fn test_show_prints_yaml() {
        let dir = TempDir::new().unwrap();
        let mut current = Config::default();
        current.general.default_output = OutputFormat::Json;

        let output = config(&paths(&dir), &current, &ConfigCommands::Show).unwrap();
        assert!(output.contains("default_output: json"));
        assert!(output.contains("default_view: cards"));
    }
}
