//! Catalog Service - Business logic layer
//!
//! Every operation is a linear sequence of required-field checks, store
//! reads, and at most one write. Read-modify-write operations (stock,
//! supplier product lists) are not isolated; concurrent calls on the same
//! document are last-write-wins.

mod association;
mod category;
mod product;
mod supplier;

use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Supplier, non_empty};
use crate::store::{Collection, DocumentStore, StoreError};

/// Service providing the catalog functions over a [`DocumentStore`].
pub struct CatalogService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> CatalogService<S> {
    /// Create a new CatalogService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn find_supplier(&self, id: &str) -> CatalogResult<Supplier> {
        self.store
            .get(Collection::Suppliers, id)
            .await?
            .ok_or(CatalogError::SupplierNotFound)?
            .decode()
            .map_err(CatalogError::from)
    }

    async fn product_exists(&self, id: &str) -> CatalogResult<bool> {
        Ok(self.store.get(Collection::Products, id).await?.is_some())
    }

    /// Fail with every id of `ids` that has no product, in request order.
    async fn ensure_products_exist<'a, I>(&self, ids: I) -> CatalogResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut missing: Vec<String> = Vec::new();
        for id in ids {
            if !missing.iter().any(|m| m == id) && !self.product_exists(id).await? {
                missing.push(id.to_string());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::ProductsNotFound(missing))
        }
    }

    /// Whether another document of `collection` already uses `name`
    async fn name_taken(&self, collection: Collection, name: &str) -> CatalogResult<bool> {
        let matches = self
            .store
            .find_by_field(collection, "name", name.into())
            .await?;
        Ok(!matches.is_empty())
    }
}

impl<S: DocumentStore> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Map a unique-index violation on `name` to `conflict`.
///
/// The name check runs before the write, so this only fires when a
/// concurrent request took the name in between.
fn name_conflict(conflict: CatalogError) -> impl FnOnce(StoreError) -> CatalogError {
    move |err| match err {
        StoreError::Duplicate(_) => conflict,
        other => other.into(),
    }
}

/// Required string field: missing, `null` and `""` all fail with `message`.
fn required(value: Option<String>, message: &'static str) -> CatalogResult<String> {
    non_empty(value).ok_or(CatalogError::InvalidInput(message))
}
