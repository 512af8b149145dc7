//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use dagpi::EndpointKind;
use serde_json::Value as JsonValue;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dagpi",
    about = "Dagpi - image manipulation and fun data from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Access token sent in the Authorization header
    #[arg(long, env = "DAGPI_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, env = "DAGPI_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Client configuration file (YAML or JSON)
    #[arg(short, long, global = true, help = "Load client settings from a YAML/JSON file")]
    pub config: Option<PathBuf>,

    /// Total request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available endpoints
    List {
        /// Only show one kind of endpoint
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Call a data endpoint and print its JSON body
    Data {
        /// Endpoint name, see `dagpi list --kind data`
        name: String,

        /// Query parameter as key=value, repeatable
        #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,

        /// Save output to file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Call an image endpoint and save the returned image
    Image {
        /// Endpoint name, see `dagpi list --kind image`
        name: String,

        /// Query parameter as key=value, repeatable (most endpoints need url=...)
        #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Destination file, `-` for stdout
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the flags accepted by the pride endpoint
    Flags,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Data,
    Image,
}

impl From<KindArg> for EndpointKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Data => EndpointKind::Data,
            KindArg::Image => EndpointKind::Image,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// Pretty-printed JSON
    Pretty,
    /// Compact JSON
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Format a JSON value according to the output format
    pub fn format_json(&self, value: &JsonValue) -> crate::error::CliResult<String> {
        match self {
            // Commands with a tabular view render it themselves
            Self::Table | Self::Pretty => Ok(serde_json::to_string_pretty(value)?),
            Self::Json => Ok(serde_json::to_string(value)?),
            Self::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Parse a `key=value` pair; the value may itself contain `=`.
pub fn parse_key_val(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", input)),
    }
}
