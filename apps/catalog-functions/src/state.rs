//! Shared application state.

use mongodb::{Client, Database};

/// State shared by the function routes and the readiness check.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares the connection pool)
    pub mongo_client: Client,
    /// Catalog database
    pub db: Database,
}
