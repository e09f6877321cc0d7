//! NLQ CLI
//!
//! Main entry point for the nlq command-line tool.
//! Runs the natural-language query service, or a single query from the shell.

mod commands;
mod context;

use clap::{Parser, Subcommand};
use commands::{AskCommand, CheckCommand, ServeCommand};
use nlq_core::{config::AppConfig, logging, AppResult, ConfigOverrides};
use std::path::PathBuf;

/// NLQ - natural-language queries over the student records
#[derive(Parser, Debug)]
#[command(name = "nlq")]
#[command(about = "Natural-language queries over a MongoDB collection", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "NLQ_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// LLM provider (gemini, ollama)
    #[arg(short, long, global = true)]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Record store backend (mongo, memory)
    #[arg(short, long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve(ServeCommand),

    /// Translate and run a single question
    Ask(AskCommand),

    /// Check model and store connectivity
    Check(CheckCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    let bind = match &cli.command {
        Commands::Serve(cmd) => cmd.bind.clone(),
        _ => None,
    };

    // File and environment first, command line last
    let config = AppConfig::load(cli.config)?.with_overrides(ConfigOverrides {
        provider: cli.provider,
        model: cli.model,
        store: cli.store,
        bind,
        log_level: cli.log_level,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("NLQ starting");
    tracing::debug!("Config: {:?}", config);

    let command_name = match &cli.command {
        Commands::Serve(_) => "serve",
        Commands::Ask(_) => "ask",
        Commands::Check(_) => "check",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Serve(cmd) => cmd.execute(&config).await,
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Check(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
