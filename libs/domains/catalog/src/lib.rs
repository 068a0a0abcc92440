//! Catalog Domain
//!
//! HTTP functions for categories, products, suppliers and the
//! supplier-product association, on top of a document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← One route per function, wrong verb → 405
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required fields, existence and uniqueness checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← DocumentStore trait (MongoDB, in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Documents, requests, responses
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogService, MongoDocumentStore, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoDocumentStore::new(client.database("catalog"));
//! store.init_indexes().await?;
//!
//! let router = handlers::router(CatalogService::new(store));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod product_ids;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryDocumentStore;
pub use models::{
    AddProductsReport, Category, CreateCategory, CreateProduct, CreateSupplier, CreatedResponse,
    DeleteById, IncreaseStock, MessageResponse, Product, RemoveProductsReport, StockResponse,
    Supplier, SupplierIdQuery, SupplierProduct, SupplierProducts, UpdateProduct, UpdateSupplier,
};
pub use crate::mongodb::MongoDocumentStore;
pub use product_ids::{DuplicateProductId, ProductIdSet};
pub use service::CatalogService;
pub use store::{Collection, Document, DocumentStore, StoreError, StoreResult};
