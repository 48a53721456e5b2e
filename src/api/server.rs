//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::mcp;
use crate::api::routes;
use crate::config::AppConfig;
use crate::rag::RagService;
use crate::Result;

/// Assemble the full application router
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let api_router = routes::api_routes(state.clone());
    let mcp_router = mcp::mcp_routes(state);

    let mut app = Router::new()
        .nest("/api", api_router)
        .nest("/mcp", mcp_router)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting profiletwin API server...");

    // Fails here, before binding, when credentials are missing
    let rag = Arc::new(RagService::from_config(config)?);
    let state = AppState::new(rag, config.server.clone());

    if enable_cors {
        info!("✅ CORS enabled");
    }
    let app = build_router(state, enable_cors);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health      - Health check");
    info!("  POST /api/ask         - Ask a question");
    info!("  POST /api/ask/batch   - Ask several questions in order");
    info!("  POST /api/search      - Search the profile");
    info!("  GET  /api/sections    - List profile sections");
    info!("  GET  /mcp             - MCP server info");
    info!("  POST /mcp             - MCP tools/list and tools/call");
    info!("  GET  /mcp/tools       - List MCP tools");
    info!("  POST /mcp/tools/call  - Call MCP tool");

    axum::serve(listener, app).await?;

    Ok(())
}
