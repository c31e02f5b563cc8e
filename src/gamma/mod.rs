//! Gamma API module - typed access to the remote content-generation service.
//!
//! - `types` - request/response shapes matching the public API schema
//! - `client` - `GammaClient`, the reqwest-backed implementation of `GammaApi`

pub mod client;
pub mod types;

pub use client::{GammaClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use types::{
    CreateFromTemplateRequest, Folder, GenerateRequest, GenerateResponse, GenerationState,
    GenerationStatus, ListQuery, Page, TextMode, Theme,
};

use async_trait::async_trait;
use thiserror::Error;

/// Longest slice of a remote error body carried into error messages.
const BODY_SNIPPET_CHARS: usize = 1000;

/// Errors raised while talking to the Gamma API.
#[derive(Debug, Error)]
pub enum GammaError {
    #[error("Gamma API key is required")]
    MissingApiKey,
    #[error("invalid Gamma API base URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("'{0}' is not a valid Gamma identifier")]
    InvalidIdentifier(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Gamma API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("request to Gamma API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response from Gamma API: {message}; body: {body}")]
    Decode { message: String, body: String },
}

impl GammaError {
    pub(crate) fn api(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            body: snippet(body),
        }
    }

    pub(crate) fn decode(err: serde_json::Error, body: &str) -> Self {
        Self::Decode {
            message: err.to_string(),
            body: snippet(body),
        }
    }

    /// HTTP status reported by the remote service, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Operations of the Gamma API used by the tool dispatcher.
///
/// Every method issues exactly one HTTP call and keeps no state between calls.
#[async_trait]
pub trait GammaApi: Send + Sync {
    /// `POST /generations`
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GammaError>;

    /// `POST /generations/from-template`
    async fn create_from_template(
        &self,
        request: &CreateFromTemplateRequest,
    ) -> Result<GenerateResponse, GammaError>;

    /// `GET /generations/{id}` - a single snapshot; callers poll by calling again.
    async fn get_generation(&self, generation_id: &str) -> Result<GenerationStatus, GammaError>;

    /// `GET /themes`
    async fn list_themes(&self, query: &ListQuery) -> Result<Page<Theme>, GammaError>;

    /// `GET /folders`
    async fn list_folders(&self, query: &ListQuery) -> Result<Page<Folder>, GammaError>;
}
