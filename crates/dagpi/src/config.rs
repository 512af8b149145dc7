//! Client configuration: token, base URL and timeouts.
//!
//! Configuration can be built in code, read from `DAGPI_*` environment
//! variables, or loaded from a YAML/JSON file whose string values may
//! reference environment variables as `${DAGPI_VAR}` or `${DAGPI_VAR:default}`.

use crate::error::{DagpiError, DagpiResult};
use crate::http::timeout_manager::TimeoutManager;
use crate::http::url_builder::UrlBuilder;
use regex::Regex;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "https://api.dagpi.xyz";

pub const ENV_TOKEN: &str = "DAGPI_TOKEN";
pub const ENV_BASE_URL: &str = "DAGPI_BASE_URL";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "DAGPI_CONNECT_TIMEOUT_MS";
pub const ENV_TIMEOUT_MS: &str = "DAGPI_TIMEOUT_MS";

/// Only variables with this prefix may be referenced from config files.
const ENV_PREFIX: &str = "DAGPI_";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("dagpi-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Timeout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    #[serde(
        default = "TimeoutConfig::default_connect_ms",
        deserialize_with = "de_millis"
    )]
    pub connect_ms: u64,
    #[serde(
        default = "TimeoutConfig::default_total_ms",
        deserialize_with = "de_millis"
    )]
    pub total_ms: u64,
}

impl TimeoutConfig {
    fn default_connect_ms() -> u64 {
        10_000
    }

    fn default_total_ms() -> u64 {
        60_000
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: Self::default_connect_ms(),
            total_ms: Self::default_total_ms(),
        }
    }
}

/// Supported file formats for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect file format from extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> DagpiResult<Self> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some(ext) => Err(DagpiError::InvalidConfig(format!(
                "Unsupported config file format: {}",
                ext
            ))),
            None => Err(DagpiError::InvalidConfig(
                "Config file has no extension".to_string(),
            )),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Access token sent verbatim in the `Authorization` header
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub timeout: TimeoutConfig,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            timeout: TimeoutConfig::default(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Read configuration from `DAGPI_*` environment variables.
    pub fn from_env() -> DagpiResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> DagpiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN).ok_or_else(|| {
            DagpiError::InvalidConfig(format!("{} is not set", ENV_TOKEN))
        })?;

        let mut config = Self::new(token);
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_CONNECT_TIMEOUT_MS) {
            config.timeout.connect_ms = parse_millis(ENV_CONNECT_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout.total_ms = parse_millis(ENV_TIMEOUT_MS, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML or JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> DagpiResult<Self> {
        let config = Self::load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML or JSON file without validating it.
    ///
    /// Callers layering other sources on top (a token from the command line,
    /// say) must call [`ClientConfig::validate`] once they are done.
    pub fn load_file<P: AsRef<Path>>(path: P) -> DagpiResult<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        tracing::debug!(path = %path.display(), ?format, "Loading client configuration");
        Self::load_content(&content, format)
    }

    /// Parse configuration content directly
    pub fn parse_content(content: &str, format: FileFormat) -> DagpiResult<Self> {
        let config = Self::load_content(content, format)?;
        config.validate()?;
        Ok(config)
    }

    fn load_content(content: &str, format: FileFormat) -> DagpiResult<Self> {
        let raw: JsonValue = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        };

        let resolved = resolve_env(&raw, &|name| std::env::var(name).ok())?;
        Ok(serde_json::from_value(resolved)?)
    }

    /// Check the token, base URL and timeouts before any client is built.
    pub fn validate(&self) -> DagpiResult<()> {
        if self.token.trim().is_empty() {
            return Err(DagpiError::InvalidConfig(
                "Access token must not be empty".to_string(),
            ));
        }

        if HeaderValue::from_str(&self.token).is_err() {
            return Err(DagpiError::InvalidConfig(
                "Access token contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        UrlBuilder::validate(&self.base_url)?;
        TimeoutManager::new(self.timeout.clone()).validate()
    }
}

/// Accept both `5000` and `"5000"`; interpolated values are always strings.
fn de_millis<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Number(u64),
        Text(String),
    }

    match Millis::deserialize(deserializer)? {
        Millis::Number(n) => Ok(n),
        Millis::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn parse_millis(name: &str, raw: &str) -> DagpiResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        DagpiError::InvalidConfig(format!("{} must be a number of milliseconds, got '{}'", name, raw))
    })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}:]+)(?::([^}]*))?\}").expect("placeholder regex"))
}

/// Substitute `${VAR}` / `${VAR:default}` in every string of a JSON tree.
fn resolve_env<F>(value: &JsonValue, lookup: &F) -> DagpiResult<JsonValue>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        JsonValue::String(s) => resolve_string(s, lookup),
        JsonValue::Object(obj) => {
            let mut resolved = serde_json::Map::new();
            for (key, val) in obj {
                resolved.insert(key.clone(), resolve_env(val, lookup)?);
            }
            Ok(JsonValue::Object(resolved))
        }
        JsonValue::Array(arr) => arr
            .iter()
            .map(|item| resolve_env(item, lookup))
            .collect::<DagpiResult<Vec<_>>>()
            .map(JsonValue::Array),
        other => Ok(other.clone()),
    }
}

fn resolve_string<F>(input: &str, lookup: &F) -> DagpiResult<JsonValue>
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains("${") {
        return Ok(JsonValue::String(input.to_string()));
    }

    let re = placeholder_regex();
    let mut result = String::with_capacity(input.len());
    let mut last = 0;

    for caps in re.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        let var_name = &caps[1];

        if !var_name.starts_with(ENV_PREFIX) {
            return Err(DagpiError::InvalidConfig(format!(
                "Environment variable '{}' is not allowed, only {}* variables may be referenced",
                var_name, ENV_PREFIX
            )));
        }

        let value = match (lookup(var_name), caps.get(2)) {
            (Some(value), _) => value,
            (None, Some(default)) => default.as_str().to_string(),
            (None, None) => {
                return Err(DagpiError::InvalidConfig(format!(
                    "Environment variable '{}' not found and no default provided",
                    var_name
                )))
            }
        };

        result.push_str(&input[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }
    result.push_str(&input[last..]);

    Ok(JsonValue::String(result))
}
