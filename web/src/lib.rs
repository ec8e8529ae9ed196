//! Axum JSON API for Todo Master.
//!
//! A thin imperative shell around [`todo_master_core::TodoService`]:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP (Axum)                │  ← JSON bodies, query strings
//! │  - Request parsing                      │  ← Request IDs, tracing
//! │  - Envelope + status mapping            │
//! ├─────────────────────────────────────────┤
//! │         todo-master-core                │
//! │  - Validation                           │
//! │  - Todo lifecycle (create/update/...)   │
//! │  - Repository                           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use todo_master_web::{build_router, AppState, Config};
//!
//! let config = Config::from_env();
//! let app = build_router(AppState::from_config(&config));
//! let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

// Re-export key types for convenience
pub use config::Config;
pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, trace_requests};
pub use routes::build_router;
pub use state::AppState;
pub use telemetry::init_tracing;
