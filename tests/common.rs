//! Shared test doubles.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map};
use tokio::sync::Mutex;

use gamma_mcp_server::gamma::{
    CreateFromTemplateRequest, Folder, GammaApi, GammaError, GenerateRequest, GenerateResponse,
    GenerationStatus, ListQuery, Page, Theme,
};
use gamma_mcp_server::mcp::{Dispatcher, McpService};

/// One call received by the fake, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Generate(GenerateRequest),
    CreateFromTemplate(CreateFromTemplateRequest),
    GetGeneration(String),
    ListThemes(ListQuery),
    ListFolders(ListQuery),
}

/// In-memory `GammaApi` with scripted responses.
#[derive(Default)]
pub struct FakeGammaApi {
    calls: Mutex<Vec<RecordedCall>>,
    statuses: Mutex<VecDeque<GenerationStatus>>,
    theme_pages: Mutex<VecDeque<Page<Theme>>>,
    failure: Option<(u16, String)>,
}

impl FakeGammaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with the given HTTP status and body.
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            failure: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub async fn push_status(&self, status: serde_json::Value) {
        let status: GenerationStatus = serde_json::from_value(status).unwrap();
        self.statuses.lock().await.push_back(status);
    }

    pub async fn push_theme_page(&self, page: serde_json::Value) {
        let page: Page<Theme> = serde_json::from_value(page).unwrap();
        self.theme_pages.lock().await.push_back(page);
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: RecordedCall) -> Result<(), GammaError> {
        self.calls.lock().await.push(call);
        match self.failure {
            Some((status, ref body)) => Err(GammaError::Api {
                status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn accepted(generation_id: &str) -> GenerateResponse {
    GenerateResponse {
        generation_id: generation_id.to_string(),
        warnings: None,
        extra: Map::new(),
    }
}

#[async_trait]
impl GammaApi for FakeGammaApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GammaError> {
        self.record(RecordedCall::Generate(request.clone())).await?;
        Ok(accepted("gen-123"))
    }

    async fn create_from_template(
        &self,
        request: &CreateFromTemplateRequest,
    ) -> Result<GenerateResponse, GammaError> {
        self.record(RecordedCall::CreateFromTemplate(request.clone()))
            .await?;
        Ok(accepted("gen-tpl-1"))
    }

    async fn get_generation(&self, generation_id: &str) -> Result<GenerationStatus, GammaError> {
        self.record(RecordedCall::GetGeneration(generation_id.to_string()))
            .await?;
        match self.statuses.lock().await.pop_front() {
            Some(status) => Ok(status),
            None => Ok(serde_json::from_value(
                json!({ "generationId": generation_id, "status": "pending" }),
            )
            .unwrap()),
        }
    }

    async fn list_themes(&self, query: &ListQuery) -> Result<Page<Theme>, GammaError> {
        self.record(RecordedCall::ListThemes(query.clone())).await?;
        Ok(self.theme_pages.lock().await.pop_front().unwrap_or(Page {
            data: Vec::new(),
            has_more: false,
            next_cursor: None,
        }))
    }

    async fn list_folders(&self, query: &ListQuery) -> Result<Page<Folder>, GammaError> {
        self.record(RecordedCall::ListFolders(query.clone())).await?;
        Ok(Page {
            data: vec![Folder {
                id: "fold-1".to_string(),
                name: "Decks".to_string(),
                extra: Map::new(),
            }],
            has_more: false,
            next_cursor: None,
        })
    }
}

pub fn dispatcher_with(api: Arc<FakeGammaApi>) -> Dispatcher {
    Dispatcher::new(api)
}

pub fn service_with(api: Arc<FakeGammaApi>) -> McpService {
    McpService::with_api(api)
}
