//! Document store abstraction.
//!
//! The functions only ever need a handful of operations per collection, so
//! the store is expressed as documents of loose JSON fields addressed by an
//! opaque string id. Typed models are decoded from and encoded to these
//! documents by the service layer.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Collections of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Categories,
    Products,
    Suppliers,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No document to update in {collection}: {id}")]
    NotFound { collection: Collection, id: String },

    /// A write broke a unique index
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// A stored document: its id plus every other field.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Decode into a model carrying an `id` field.
    pub fn decode<T: DeserializeOwned>(self) -> StoreResult<T> {
        let mut fields = self.data;
        fields.insert("id".to_string(), Value::String(self.id));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// Serialize a model into document fields.
///
/// `None` fields serialize as `null` unless the type skips them, which is how
/// partial updates are expressed.
pub fn to_fields<T: Serialize>(value: &T) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::Serialization(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

/// Access to the catalog collections.
///
/// No operation is transactional; read-modify-write sequences built on top
/// of this trait are last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by id
    async fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>>;

    /// Documents whose `field` equals `value`
    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: Value,
    ) -> StoreResult<Vec<Document>>;

    /// Every document of the collection
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Document>>;

    /// Insert a document and return its generated id
    async fn insert(&self, collection: Collection, data: Map<String, Value>) -> StoreResult<String>;

    /// Merge `data` into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> StoreResult<()>;

    /// Delete a document; deleting a missing id is not an error
    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()>;
}
