//! Symdex - Main entrypoint.
//!
//! Command-line front end for the symbol index: loads configuration and the
//! corpus, builds the index, and answers prefix or line-completion queries.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use symdex_lib::config::{ConfigLoader, LogConfig, SymdexConfig, ENV_PREFIX};
use symdex_lib::error::{
    report_error, set_error_reporter, ErrorContext, SymdexError, SymdexResult,
    TracingErrorReporter,
};
use symdex_lib::trigger::TriggerPolicy;
use symdex_lib::{Suggestion, SymbolIndex};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for symdex.
#[derive(Parser, Debug)]
#[clap(name = "symdex", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List suggestions for a symbol prefix
    Query {
        /// Prefix typed so far
        prefix: String,

        /// Corpus file, overriding the configured one
        #[clap(long, value_parser)]
        corpus: Option<PathBuf>,

        /// Print suggestions as JSON
        #[clap(long)]
        json: bool,
    },

    /// List suggestions for the text before the cursor
    Complete {
        /// Line text up to the cursor
        line: String,

        /// Corpus file, overriding the configured one
        #[clap(long, value_parser)]
        corpus: Option<PathBuf>,

        /// Use the trailing word run instead of the configured trigger
        #[clap(long)]
        word_run: bool,

        /// Print suggestions as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that stdout only carries suggestions.
fn init_logging(log: &LogConfig) -> SymdexResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SymdexError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the index from the configured corpus, or from `corpus` if given.
fn build_index(config: &SymdexConfig, corpus: Option<PathBuf>) -> SymdexResult<SymbolIndex> {
    let mut config = config.clone();
    if let Some(path) = corpus {
        config.corpus.path = path;
    }
    SymbolIndex::from_config(&config)
}

/// Prints suggestions as JSON or one per line.
fn print_suggestions(suggestions: &[Suggestion], json: bool) -> SymdexResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, suggestions)?;
        writeln!(out)?;
        return Ok(());
    }

    for suggestion in suggestions {
        match &suggestion.detail {
            Some(detail) => writeln!(out, "{}\t{}", suggestion.label, detail)?,
            None => writeln!(out, "{}", suggestion.label)?,
        }
    }
    Ok(())
}

fn write_default_config(output: &Path) -> SymdexResult<()> {
    let default_config = SymdexConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| SymdexError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: Args) -> SymdexResult<()> {
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    // The default configuration is always valid, so gen-config never needs a loaded one
    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;
        return write_default_config(output);
    }

    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Fall back to default logging so the failure is still reported
            init_logging(&LogConfig::default())?;
            return Err(e.into());
        }
    };
    init_logging(&config.log)?;

    match args.command {
        Command::Query {
            prefix,
            corpus,
            json,
        } => {
            let index = build_index(&config, corpus)?;
            print_suggestions(&index.suggest(&prefix), json)
        }
        Command::Complete {
            line,
            corpus,
            word_run,
            json,
        } => {
            let trigger = if word_run {
                TriggerPolicy::WordRun
            } else {
                config.trigger.policy()?
            };
            let index = build_index(&config, corpus)?;
            match index.complete(&line, &trigger) {
                Some(suggestions) => print_suggestions(&suggestions, json),
                None => {
                    info!("Trigger did not match, no completion requested");
                    Ok(())
                }
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}

/// Main entry point for the application.
fn main() {
    set_error_reporter(Arc::new(TracingErrorReporter));

    let args = <Args as clap::Parser>::parse();
    if let Err(e) = run(args) {
        report_error(&ErrorContext::new(e, "symdex"));
        process::exit(1);
    }
}
