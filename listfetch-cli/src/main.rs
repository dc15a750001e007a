//! listfetch - fetch, search and display a remote item list
//!
//! Main entry point: parses flags, sets up logging, wires the HTTP source,
//! the fetch controller and the terminal display loop together.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use listfetch_core::{view, FetchController, HttpSource, ItemSource, ListConfig};

mod interactive;
mod terminal_view;

use terminal_view::{OutputFormat, TerminalView};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "listfetch",
    about = "Fetch, search and display a remote item list",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON (stderr)
    #[clap(long, global = true)]
    json_logs: bool,

    /// Config file (default: per-user config.json if present)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Full endpoint URL, overrides base_url and path from config
    #[clap(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds
    #[clap(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Fetch the list once (retrying until it succeeds) and print it
    Show {
        /// Only show items whose name contains this text (case-sensitive)
        #[clap(long, short, default_value = "")]
        search: String,

        /// Output format
        #[clap(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Load the list, then treat every stdin line as a new search
    Interactive {
        /// Output format
        #[clap(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the resolved configuration as JSON
    Config,
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so stdout only carries results.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve config file precedence, then apply CLI overrides
fn resolve_config(cli: &Cli) -> Result<ListConfig> {
    let mut config =
        ListConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(url) = &cli.url {
        config.base_url = url.clone();
        config.path = String::new();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_seconds = timeout;
    }

    config.validate().context("Invalid configuration")?;
    debug!("Resolved endpoint: {}", config.endpoint());
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.json_logs);

    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Show { search, format } => show_command(&config, &search, format).await,
        Command::Interactive { format } => interactive::run(&config, format).await,
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Build the production item source
pub(crate) fn http_source(config: &ListConfig) -> Result<Arc<dyn ItemSource>> {
    let source = HttpSource::from_config(config).context("Failed to set up HTTP source")?;
    Ok(Arc::new(source))
}

async fn show_command(config: &ListConfig, search: &str, format: OutputFormat) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut controller = FetchController::new(http_source(config)?, tx, config.retry_policy());

    let display = tokio::spawn(async move {
        let mut terminal = TerminalView::new(std::io::stdout(), format);
        view::drive(&mut terminal, rx).await;
        terminal
    });

    let report = controller.start(search).join().await;
    drop(controller);

    let terminal = display.await.context("Display loop failed")?;

    if let Some(report) = report {
        debug!(
            "Fetch finished after {} retries ({} entries shown)",
            report.retries,
            terminal.shown()
        );
    }

    Ok(())
}
