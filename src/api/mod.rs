//! API server module exposing the RAG service via REST and MCP

pub mod handlers;
pub mod mcp;
pub mod routes;
pub mod server;
pub mod tools;
pub mod types;

pub use handlers::AppState;
pub use server::build_router;
pub use server::serve_api;
