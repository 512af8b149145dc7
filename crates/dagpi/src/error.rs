#[derive(Debug, thiserror::Error)]
pub enum DagpiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid value '{value}' for parameter '{name}': {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl DagpiError {
    pub(crate) fn invalid_parameter(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// True for failures that happened before or while talking to the server,
    /// as opposed to a bad argument or configuration.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DagpiError::Http(_) | DagpiError::Timeout(_) | DagpiError::Connection(_)
        )
    }
}

pub type DagpiResult<T> = Result<T, DagpiError>;
