//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;

    // Create context for commands
    let ctx = commands::Context {
        api_key: cli.api_key,
        tailnet: cli.tailnet,
        domain: cli.domain,
        config,
        config_path,
    };

    // Dispatch to appropriate command
    match cli.command {
        None => commands::generate::execute(ctx, cli.generate).await,
        Some(Commands::Generate(args)) => commands::generate::execute(ctx, args).await,
        Some(Commands::Config(args)) => commands::config::execute(&ctx, args),
    }
}

/// Install the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over the verbosity flags when it is set.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("debug")
        } else if cli.verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.debug)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();
}
