//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and shared middleware
//! - Health and readiness endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(functions, &config)?
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &config, async { client.shutdown().await }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
