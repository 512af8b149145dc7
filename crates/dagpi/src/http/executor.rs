use super::timeout_manager::TimeoutManager;
use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::{DagpiError, DagpiResult};
use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Request, StatusCode};
use serde_json::{Map, Value as JsonValue};
use std::time::Instant;

/// Decoded body of a data endpoint
pub type JsonMap = Map<String, JsonValue>;

/// Issues authenticated GET requests against the configured base URL.
///
/// Holds one pooled `reqwest::Client`; cloning the executor is cheap and
/// shares the pool.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
    base_url: String,
    token: HeaderValue,
    timeout_manager: TimeoutManager,
}

impl HttpExecutor {
    pub fn new(config: &ClientConfig) -> DagpiResult<Self> {
        config.validate()?;

        let mut token = HeaderValue::from_str(&config.token).map_err(|_| {
            DagpiError::InvalidConfig(
                "Access token contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        token.set_sensitive(true);

        let timeout_manager = TimeoutManager::new(config.timeout.clone());
        let client = timeout_manager
            .apply_to_client_builder(Client::builder())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token,
            timeout_manager,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the GET request for `endpoint` without sending it
    pub fn build_request(&self, endpoint: &Endpoint, values: &[&str]) -> DagpiResult<Request> {
        let url = endpoint.url(&self.base_url, values)?;

        let request = self
            .client
            .request(Method::GET, url)
            .header(AUTHORIZATION, self.token.clone())
            .build()?;

        Ok(request)
    }

    /// GET a data endpoint and decode its body as a JSON object
    pub async fn get_json(&self, endpoint: &Endpoint, values: &[&str]) -> DagpiResult<JsonMap> {
        let body = self.execute(endpoint, values).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET an image endpoint and return the body bytes untouched.
    ///
    /// A non-2xx answer fails with [`DagpiError::Status`]; its body is kept
    /// in the error as text and never handed back as image bytes.
    pub async fn get_bytes(&self, endpoint: &Endpoint, values: &[&str]) -> DagpiResult<Bytes> {
        self.execute(endpoint, values).await
    }

    /// Send the request and read the whole body under the total timeout.
    async fn execute(&self, endpoint: &Endpoint, values: &[&str]) -> DagpiResult<Bytes> {
        let request = self.build_request(endpoint, values)?;
        let start_time = Instant::now();

        tracing::debug!(endpoint = endpoint.name, path = endpoint.path, "Sending request");

        let (status, body) = self
            .timeout_manager
            .execute_with_timeout(async {
                let response = self.client.execute(request).await?;
                let status = response.status();
                let body = response.bytes().await?;
                Ok::<_, reqwest::Error>((status, body))
            })
            .await?;

        tracing::debug!(
            endpoint = endpoint.name,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Received response"
        );

        check_status(status, &body)?;
        Ok(body)
    }
}

fn check_status(status: StatusCode, body: &Bytes) -> DagpiResult<()> {
    if status.is_success() {
        return Ok(());
    }

    Err(DagpiError::Status {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
