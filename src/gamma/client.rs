//! reqwest-backed Gamma API client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::types::{
    CreateFromTemplateRequest, Folder, GenerateRequest, GenerateResponse, GenerationStatus,
    ListQuery, Page, Theme,
};
use super::{GammaApi, GammaError};

pub const DEFAULT_BASE_URL: &str = "https://public-api.gamma.app/v1.0";
pub const API_KEY_HEADER: &str = "X-API-KEY";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Immutable client for one Gamma workspace.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct GammaClient {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl fmt::Debug for GammaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GammaClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl GammaClient {
    /// Create a client. Fails before any network use when the key is empty.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, GammaError> {
        Self::with_timeout(api_key, base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, GammaError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GammaError::MissingApiKey);
        }

        let base_url = parse_base_url(base_url)?;

        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(GammaError::ClientBuild)?;

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Build `{base}/{segments...}` with every segment percent-encoded.
    ///
    /// `.` and `..` are refused: the URL parser would resolve them and the
    /// request would reach a different endpoint.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GammaError> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(GammaError::InvalidIdentifier(dot.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GammaError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("Gamma API {} {}", method, url.path());
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, GammaError> {
        let response = builder.send().await.map_err(GammaError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(GammaError::Transport)?;

        if !status.is_success() {
            return Err(GammaError::api(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|err| GammaError::decode(err, &body))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, GammaError> {
    let url = Url::parse(raw.trim()).map_err(|_| GammaError::InvalidBaseUrl(raw.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(GammaError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

#[async_trait]
impl GammaApi for GammaClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GammaError> {
        let url = self.endpoint(&["generations"])?;
        self.send(self.request(Method::POST, url).json(request)).await
    }

    async fn create_from_template(
        &self,
        request: &CreateFromTemplateRequest,
    ) -> Result<GenerateResponse, GammaError> {
        let url = self.endpoint(&["generations", "from-template"])?;
        self.send(self.request(Method::POST, url).json(request)).await
    }

    async fn get_generation(&self, generation_id: &str) -> Result<GenerationStatus, GammaError> {
        let url = self.endpoint(&["generations", generation_id])?;
        self.send(self.request(Method::GET, url)).await
    }

    async fn list_themes(&self, query: &ListQuery) -> Result<Page<Theme>, GammaError> {
        let url = self.endpoint(&["themes"])?;
        self.send(self.request(Method::GET, url).query(&query.to_pairs()))
            .await
    }

    async fn list_folders(&self, query: &ListQuery) -> Result<Page<Folder>, GammaError> {
        let url = self.endpoint(&["folders"])?;
        self.send(self.request(Method::GET, url).query(&query.to_pairs()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = GammaClient::new("  ", DEFAULT_BASE_URL).unwrap_err();
        assert!(matches!(err, GammaError::MissingApiKey));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = GammaClient::new("key", "not a url").unwrap_err();
        assert!(matches!(err, GammaError::InvalidBaseUrl(_)));

        let err = GammaClient::new("key", "mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, GammaError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = GammaClient::new("key", DEFAULT_BASE_URL).unwrap();
        let url = client.endpoint(&["generations", "from-template"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://public-api.gamma.app/v1.0/generations/from-template"
        );

        let client = GammaClient::new("key", "http://localhost:9000/v1.0/").unwrap();
        let url = client.endpoint(&["themes"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/v1.0/themes");
    }

    #[test]
    fn test_generation_id_is_encoded_as_one_segment() {
        let client = GammaClient::new("key", DEFAULT_BASE_URL).unwrap();
        let url = client.endpoint(&["generations", "../themes?x=1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://public-api.gamma.app/v1.0/generations/..%2Fthemes%3Fx=1"
        );
    }

    #[test]
    fn test_dot_segments_are_refused() {
        let client = GammaClient::new("key", DEFAULT_BASE_URL).unwrap();
        for id in [".", ".."] {
            let err = client.endpoint(&["generations", id]).unwrap_err();
            assert!(matches!(err, GammaError::InvalidIdentifier(ref got) if got == id));
        }

        let url = client.endpoint(&["generations", "..."]).unwrap();
        assert_eq!(url.as_str(), "https://public-api.gamma.app/v1.0/generations/...");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = GammaClient::new("sk-secret-value", DEFAULT_BASE_URL).unwrap();
        let printed = format!("{client:?}");
        assert!(!printed.contains("sk-secret-value"));
        assert!(printed.contains("<redacted>"));
    }
}
