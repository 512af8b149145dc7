//! Utility functions for the CLI

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use colored::{ColoredString, Colorize};
use dagpi::ClientConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize tracing with proper filtering.
///
/// Logs go to stderr so image bytes written to stdout stay clean.
pub fn init_tracing(verbose: bool) -> CliResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        CliError::General(format!("Failed to set tracing subscriber: {}", e))
    })?;

    Ok(())
}

/// Utility for colored console output
pub struct ColoredOutput;

impl ColoredOutput {
    pub fn success(msg: &str) -> ColoredString {
        msg.green().bold()
    }

    pub fn error(msg: &str) -> ColoredString {
        msg.red().bold()
    }

    pub fn info(msg: &str) -> ColoredString {
        msg.blue()
    }

    pub fn dim(msg: &str) -> ColoredString {
        msg.dimmed()
    }

    pub fn highlight(msg: &str) -> ColoredString {
        msg.cyan().bold()
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Ensure the parent directory of a file exists
pub fn ensure_parent_dir(path: &std::path::Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Resolve client settings: config file first, then flags and `DAGPI_*`
/// variables on top.
pub fn build_client_config(cli: &Cli) -> CliResult<ClientConfig> {
    let mut config = match (&cli.config, &cli.token) {
        (Some(path), _) => ClientConfig::load_file(path)?,
        (None, Some(token)) => ClientConfig::new(token.clone()),
        (None, None) => {
            return Err(CliError::InvalidArgument(
                "No access token: pass --token, set DAGPI_TOKEN or use --config".to_string(),
            ))
        }
    };

    if let Some(token) = &cli.token {
        config.token = token.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout.total_ms = timeout_ms;
        config.timeout.connect_ms = config.timeout.connect_ms.min(timeout_ms);
    }

    if config.token.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "No access token in the config file: pass --token or set DAGPI_TOKEN".to_string(),
        ));
    }

    config.validate()?;
    Ok(config)
}
