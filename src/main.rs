use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use taskflow::cli::args::{Cli, Commands};
use taskflow::cli::commands;
use taskflow::config::{Config, LoggingConfig, Paths};
use taskflow::core::{Clock, FixedClock, SystemClock};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file).context("loading configuration")?;
    init_tracing(&config.logging)?;
    config.general.color.apply();

    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => Box::new(FixedClock::new(today)),
        None => Box::new(SystemClock),
    };
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args, clock.as_ref(), format)?,
        Commands::Add(args) => commands::add(&args, clock.as_ref(), format)?,
        Commands::Board(args) => {
            let view = args.view.unwrap_or(config.board.default_view);
            commands::board(&args, view, clock.as_ref(), format)?
        }
        Commands::Config(args) => commands::config(&paths, &config, &args.command)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("invalid logging.level '{}'", logging.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
