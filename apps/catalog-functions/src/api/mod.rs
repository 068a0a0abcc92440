//! API routes module

pub mod health;

use axum::Router;
use domain_catalog::{CatalogService, MongoDocumentStore, handlers};

use crate::state::AppState;

/// Catalog functions over the MongoDB store.
///
/// Creates the unique name indexes before any route is served.
pub async fn functions(state: &AppState) -> eyre::Result<Router> {
    let store = MongoDocumentStore::new(state.db.clone());
    store.init_indexes().await?;

    Ok(handlers::router(CatalogService::new(store)))
}
