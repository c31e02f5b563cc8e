//! MCP Stateless HTTP Handlers for Actix-Web.
//!
//! Each request is independent; no session or SSE connection is kept.

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// MCP State for Actix-Web.
pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(state: web::Data<McpState>, body: web::Bytes) -> impl Responder {
    let request: RpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("rejected malformed MCP request: {}", err);
            return HttpResponse::Ok()
                .content_type("application/json")
                .json(OutboundResponse::parse_error(err.to_string()));
        }
    };

    if let Some(response) = state.service.handle_request(request).await {
        return HttpResponse::Ok()
            .content_type("application/json")
            .json(response);
    }

    // Notifications return 202 Accepted
    HttpResponse::Accepted().finish()
}

/// Health check - GET /health
pub async fn health_handler(state: web::Data<McpState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "server": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.service.tool_count(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Configure MCP routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));

    // Clients configured with the older SSE path post here
    cfg.service(web::resource("/sse").route(web::post().to(rpc_handler)));

    cfg.service(web::resource("/health").route(web::get().to(health_handler)));
}
