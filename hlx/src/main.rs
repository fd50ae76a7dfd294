//! hlx CLI - Command-line front end for the hilex highlighting lexer.
//!
//! This is the main entry point for the hlx CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_languages, run_stats, run_tokens, LanguagesArgs, StatsArgs, TokensArgs,
};
use config::Config;
use error::{HlxError, Result};

/// hlx - Tokenize source files for syntax highlighting
///
/// hlx runs the hilex lexer over source files and reports the classified
/// tokens, their screen positions, and per-file statistics.
#[derive(Parser, Debug)]
#[command(name = "hlx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize source files for syntax highlighting", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "HLX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HLX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "HLX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the hlx CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of the given files
    ///
    /// Each token is reported with its kind, line and column, horizontal
    /// and vertical position, and source text.
    Tokens(TokensCommand),

    /// Count tokens per kind in the given files
    Stats(StatsCommand),

    /// List supported languages and their file extensions
    Languages(LanguagesCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Language to use instead of detecting it from the extension
    #[arg(short, long)]
    language: Option<String>,

    /// JSON glyph metrics table for horizontal positions
    #[arg(short, long)]
    metrics: Option<PathBuf>,

    /// Uniform glyph advance width for horizontal positions
    #[arg(long, conflicts_with = "metrics")]
    monospace: Option<f32>,
}

/// Arguments for the stats subcommand.
#[derive(Parser, Debug)]
struct StatsCommand {
    /// Source files to summarize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Language to use instead of detecting it from the extension
    #[arg(short, long)]
    language: Option<String>,
}

/// Arguments for the languages subcommand.
#[derive(Parser, Debug)]
struct LanguagesCommand {
    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Main entry point for the hlx CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, &config)
}

/// Initialize the logging system.
///
/// Log output goes to stderr so that reports on stdout stay parseable.
/// Records from the library crates arrive through the `log` bridge.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| HlxError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: &Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                verbose,
                files: args.files,
                format: args.format,
                language: args.language,
                metrics: args.metrics,
                monospace: args.monospace,
            },
            config,
        ),
        Commands::Stats(args) => run_stats(
            StatsArgs {
                verbose,
                files: args.files,
                format: args.format,
                language: args.language,
            },
            config,
        ),
        Commands::Languages(args) => run_languages(
            LanguagesArgs {
                format: args.format,
            },
            config,
        ),
    }
}
