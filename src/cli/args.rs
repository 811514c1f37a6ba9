use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::board::{TaskEdit, ViewMode};

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "Turn one-line task descriptions into structured tasks")]
#[command(long_about = "taskflow - natural-language task capture

Reads free-form descriptions such as
  \"Call client Rajeev tomorrow 5pm P1\"
and extracts the task name, assignee, due date, due time and priority.

QUICK START:
  taskflow parse \"Submit report by Friday 20th June P2\"
  taskflow add \"Water plants tomorrow 7am\"
  taskflow board --file tasks.txt --view table

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Reference date for relative words like "today" and "tomorrow" (YYYY-MM-DD)
    #[arg(long, global = true, env = "TASKFLOW_TODAY", value_parser = parse_day)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a task description and show the extracted fields
    ///
    /// Nothing is stored. Every field has a default, so any text parses.
    ///
    /// # Examples
    ///
    ///   taskflow parse "Call client Rajeev tomorrow 5pm P1"
    ///   taskflow p "Finish landing page Aman by 11pm 20th June"
    ///   taskflow parse -o json "Submit report by Friday 20th June P2"
    ///
    /// # Supported Patterns
    ///
    ///   Priority:   P1 P2 P3 P4 (default P3)
    ///   Times:      5pm, 11:30am, 14:30 (default 9:00 AM; a bare number is not a time)
    ///   Dates:      today, tomorrow, 20th June, 20/06, 20-06-2025, 2025-06-20
    ///   Assignee:   by/to/for Name, or Name by/at/on
    #[command(alias = "p")]
    Parse(TextArgs),

    /// Build the task record a board would store for a description
    ///
    /// Shows the id, creation time and completion state alongside the
    /// parsed fields.
    ///
    /// # Examples
    ///
    ///   taskflow add "Water plants tomorrow 7am"
    ///   taskflow a -o json "Pay rent 1st July P1"
    #[command(alias = "a")]
    Add(TextArgs),

    /// Capture a list of descriptions and render the task board
    ///
    /// Reads one description per line from a file, or from stdin when no
    /// file is given. Blank lines and lines starting with '#' are skipped.
    /// Tasks get ids 1, 2, 3... in input order. Edits are applied first,
    /// then completion toggles, then deletions.
    ///
    /// # Examples
    ///
    ///   taskflow board --file tasks.txt
    ///   cat tasks.txt | taskflow board --view table
    ///   taskflow board -f tasks.txt --complete 2 --delete 3
    ///   taskflow board -f tasks.txt --edit 1:assignee=Priya --edit 1:priority=P1
    Board(BoardArgs),

    /// Create or inspect the configuration file
    ///
    /// The config lives in ~/.taskflow/config.yaml.
    ///
    /// # Examples
    ///
    ///   taskflow config init           Write the default config
    ///   taskflow config init --force   Overwrite an existing config
    ///   taskflow config show           Print the effective settings
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    ///
    /// Example: taskflow completions bash > ~/.bash_completion.d/taskflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// A task description given as one or more words.
#[derive(Args)]
pub struct TextArgs {
    /// The task description in natural language
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TextArgs {
    /// The words joined back into one description.
    #[must_use]
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for the board command.
#[derive(Args)]
pub struct BoardArgs {
    /// File with one task description per line (defaults to stdin)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Board layout (defaults to `board.default_view` from the config file)
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Edit one field of a task, e.g. `2:priority=P1` (repeatable)
    ///
    /// Fields: name, assignee, date (YYYY-MM-DD), time (5pm, 17:30) and
    /// priority (P1-P4).
    #[arg(long, value_name = "ID:FIELD=VALUE", value_parser = parse_edit)]
    pub edit: Vec<(u64, TaskEdit)>,

    /// Toggle completion for a task id (repeatable)
    #[arg(long, value_name = "ID")]
    pub complete: Vec<u64>,

    /// Delete a task id (repeatable)
    #[arg(long, value_name = "ID")]
    pub delete: Vec<u64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration file
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as YAML
    Show,
}

/// Parse an `ID:FIELD=VALUE` board edit.
fn parse_edit(s: &str) -> Result<(u64, TaskEdit), String> {
    let (id, assignment) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ID:FIELD=VALUE, got '{s}'"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid task id '{id}'"))?;
    let (field, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("expected ID:FIELD=VALUE, got '{s}'"))?;
    let edit = TaskEdit::field(field, value).map_err(|e| e.to_string())?;
    Ok((id, edit))
}

/// Parse a `YYYY-MM-DD` reference date.
fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{s}': {e}"))
}
