//! MCP stdio transport
//!
//! Reads newline-delimited JSON-RPC requests, dispatches them through the
//! shared `McpService` and writes one response per line.

use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// Serve on the process stdin/stdout until stdin closes.
pub async fn run(service: McpService) -> std::io::Result<()> {
    info!("Gamma MCP server running on stdio");
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    serve(&service, reader, writer).await
}

/// Serve requests from `reader` until EOF.
pub async fn serve<R, W>(service: &McpService, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<RpcRequest>(&line) {
            Ok(request) => service.handle_request(request).await,
            Err(err) => Some(OutboundResponse::parse_error(err.to_string())),
        };

        if let Some(response) = response {
            write_response(&mut writer, &response).await?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &OutboundResponse) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut payload = match serde_json::to_vec(response) {
        Ok(payload) => payload,
        Err(err) => {
            error!("Failed to encode MCP response: {err}");
            return Ok(());
        }
    };
    payload.push(b'\n');
    writer.write_all(&payload).await?;
    writer.flush().await
}
