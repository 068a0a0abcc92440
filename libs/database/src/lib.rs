//! Database connectors for the catalog functions.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, retry and health checks
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
