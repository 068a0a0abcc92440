use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Combine the function routes with documentation and cross-cutting middleware.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, spec at `/api-docs/openapi.json`
/// - The function routes merged at the root (`/createCategory`, ...)
/// - A plain-text 404 fallback
/// - Tracing, security headers, optional CORS, compression
/// - A concurrency cap of `config.max_concurrent_requests` in-flight requests
///
/// Routes merged into the result afterwards (health, readiness) are not
/// subject to these layers.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set but empty or invalid.
pub fn create_router<T>(functions: Router, config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(functions)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = cors_layer_from_env()? {
        router = router.layer(cors);
    }

    info!(
        max_concurrent_requests = config.max_concurrent_requests,
        "Request concurrency limit configured"
    );

    Ok(router
        .layer(CompressionLayer::new())
        .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests)))
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before the server future resolves; cleanup
/// gets at most `shutdown_timeout_secs` seconds.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let shutdown_timeout = Duration::from_secs(server_config.shutdown_timeout_secs);

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = coordinator.clone();
    tokio::spawn(async move { signal_handle.listen_for_signals().await });

    let cleanup_handle = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator.wait().await;

            info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
            match tokio::time::timeout(shutdown_timeout, cleanup).await {
                Ok(()) => info!("Cleanup completed successfully"),
                Err(_) => warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                ),
            }
        })
    };

    let serve_coordinator = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { serve_coordinator.wait().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Serve errors also release the cleanup task.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
