//! # Axum Helpers
//!
//! Utilities shared by the HTTP functions host.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers, CORS from env)
//! - **[`errors`]**: `AppError` with plain-text responses and error codes
//! - **[`extractors`]**: JSON body and query extractors that reject with 400
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::{Router, routing::post};
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let functions = Router::new().route("/createCategory", post(create_category));
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(functions, &config)?;
//! create_production_app(router, &config, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{cors_layer_from_env, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode};

// Re-export extractors
pub use extractors::{JsonBody, QueryParams};
