//! Gamma MCP server.
//!
//! Exposes the Gamma content-generation API as MCP tools over stdio or
//! HTTP JSON-RPC.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};

pub mod config;
pub mod gamma;
pub mod mcp;

pub use crate::config::{Config, ConfigError, Transport};
pub use crate::gamma::{GammaApi, GammaClient, GammaError};
pub use crate::mcp::{McpService, McpState};

/// Build the service for a validated configuration.
pub fn build_service(config: &Config) -> Result<McpService, GammaError> {
    let client = GammaClient::with_timeout(
        config.api_key.clone(),
        &config.base_url,
        config.request_timeout,
    )?;
    Ok(McpService::with_api(Arc::new(client)))
}

/// Serve the HTTP transport until shutdown.
pub async fn run_http(service: McpService, host: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(McpState::new(service));

    log::info!("Gamma MCP server running on http://{}:{}", host, port);
    log::info!("MCP endpoint: http://{}:{}/mcp", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(mcp::config)
    })
    .bind((host, port))?
    .run()
    .await
}

/// Serve whichever transport the configuration selects.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let service = build_service(&config)?;

    match config.transport {
        Transport::Stdio => mcp::stdio::run(service).await?,
        Transport::Http => run_http(service, &config.host, config.port).await?,
    }
    Ok(())
}
