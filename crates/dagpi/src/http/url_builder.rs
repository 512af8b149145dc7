//! URL building utilities for Dagpi requests

use crate::error::{DagpiError, DagpiResult};
use url::Url;

/// URL builder that handles base/path joining and query encoding
pub struct UrlBuilder;

impl UrlBuilder {
    /// Join base URL with an endpoint path, handling slashes properly.
    ///
    /// The endpoint path is always resolved relative to the base, so a base
    /// with its own path prefix (a proxy, a mock server mount) keeps it:
    /// - `join("https://api.dagpi.xyz", "/data/wtp")` -> `https://api.dagpi.xyz/data/wtp`
    /// - `join("http://localhost:8080/dagpi", "/image/pixel/")` -> `http://localhost:8080/dagpi/image/pixel/`
    pub fn join(base_url: &str, path: &str) -> DagpiResult<Url> {
        let mut base = Self::parse(base_url)?;

        if path.is_empty() {
            return Ok(base);
        }

        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        base.join(path.trim_start_matches('/')).map_err(|e| {
            DagpiError::InvalidConfig(format!(
                "Failed to join URL '{}' with path '{}': {}",
                base_url, path, e
            ))
        })
    }

    /// Join base URL with path and append query parameters in the given order.
    ///
    /// Values are form-urlencoded, so reserved characters (`&`, `=`, `?`, `#`,
    /// `/`, spaces) reach the server as literal data.
    pub fn join_with_query(
        base_url: &str,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> DagpiResult<Url> {
        let mut url = Self::join(base_url, path)?;

        if !query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query_params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Validate that a URL is well-formed and uses http(s)
    pub fn validate(url: &str) -> DagpiResult<()> {
        Self::parse(url).map(|_| ())
    }

    fn parse(url: &str) -> DagpiResult<Url> {
        let parsed = Url::parse(url)
            .map_err(|e| DagpiError::InvalidConfig(format!("Invalid URL '{}': {}", url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(DagpiError::InvalidConfig(format!(
                "Unsupported URL scheme '{}' in '{}'",
                other, url
            ))),
        }
    }
}
