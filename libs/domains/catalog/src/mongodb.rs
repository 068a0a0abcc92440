//! MongoDB implementation of DocumentStore
//!
//! Documents are stored with a string `_id` (UUID v7), every other field is
//! stored as given.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Database, IndexModel,
    bson::{self, Bson, doc},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use serde_json::{Map, Value};
use tracing::instrument;
use uuid::Uuid;

use crate::store::{Collection, Document, DocumentStore, StoreError, StoreResult};

const DUPLICATE_KEY: i32 = 11000;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            StoreError::Duplicate(err.to_string())
        } else {
            StoreError::Backend(err.to_string())
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// MongoDB-backed document store
#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    /// Create a store over `db`; collections are named after [`Collection`].
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let store = MongoDocumentStore::new(client.database("catalog"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<bson::Document> {
        self.db.collection(collection.as_ref())
    }

    /// Unique indexes on `categories.name` and `suppliers.name`.
    ///
    /// The functions check names before inserting; the indexes catch
    /// concurrent creates that race past that check.
    pub async fn init_indexes(&self) -> StoreResult<()> {
        for collection in [Collection::Categories, Collection::Suppliers] {
            let index = IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name(format!("idx_{}_name_unique", collection))
                        .build(),
                )
                .build();
            self.collection(collection).create_index(index).await?;
        }

        tracing::info!("MongoDB indexes initialized");
        Ok(())
    }
}

/// Split a raw document into its id and plain JSON fields.
fn into_document(mut raw: bson::Document) -> StoreResult<Document> {
    let id = match raw.remove("_id") {
        Some(Bson::String(id)) => id,
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => {
            return Err(StoreError::Serialization(
                "document without _id".to_string(),
            ));
        }
    };

    match Bson::Document(raw).into_relaxed_extjson() {
        Value::Object(data) => Ok(Document::new(id, data)),
        other => Err(StoreError::Serialization(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self))]
    async fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        self.collection(collection)
            .find_one(doc! { "_id": id })
            .await?
            .map(into_document)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: Value,
    ) -> StoreResult<Vec<Document>> {
        let mut filter = bson::Document::new();
        filter.insert(field, bson::to_bson(&value)?);

        let raw: Vec<bson::Document> = self
            .collection(collection)
            .find(filter)
            .await?
            .try_collect()
            .await?;
        raw.into_iter().map(into_document).collect()
    }

    #[instrument(skip(self))]
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let raw: Vec<bson::Document> = self
            .collection(collection)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        raw.into_iter().map(into_document).collect()
    }

    #[instrument(skip(self, data))]
    async fn insert(&self, collection: Collection, data: Map<String, Value>) -> StoreResult<String> {
        let id = Uuid::now_v7().to_string();
        let mut document = bson::to_document(&data)?;
        document.insert("_id", id.clone());

        self.collection(collection).insert_one(document).await?;

        tracing::info!(%collection, %id, "Document created");
        Ok(id)
    }

    #[instrument(skip(self, data))]
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> StoreResult<()> {
        let not_found = || StoreError::NotFound {
            collection,
            id: id.to_string(),
        };

        // `$set` rejects an empty document.
        if data.is_empty() {
            let count = self
                .collection(collection)
                .count_documents(doc! { "_id": id })
                .await?;
            return if count == 0 { Err(not_found()) } else { Ok(()) };
        }

        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": bson::to_document(&data)? })
            .await?;
        if result.matched_count == 0 {
            return Err(not_found());
        }

        tracing::info!(%collection, %id, "Document updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;

        tracing::info!(%collection, %id, deleted = result.deleted_count, "Document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn test_into_document_extracts_string_id() {
        let raw = doc! { "_id": "abc", "name": "Agua", "stock": 3_i64, "price": 1.5 };
        let document = into_document(raw).unwrap();

        assert_eq!(document.id, "abc");
        assert!(!document.data.contains_key("_id"));
        assert_eq!(document.data["name"], json!("Agua"));
        assert_eq!(document.data["stock"], json!(3));
        assert_eq!(document.data["price"], json!(1.5));
    }

    #[test]
    fn test_into_document_accepts_object_id() {
        let oid = ObjectId::new();
        let document = into_document(doc! { "_id": oid, "name": "x" }).unwrap();
        assert_eq!(document.id, oid.to_hex());
    }

    #[test]
    fn test_into_document_requires_id() {
        assert!(into_document(doc! { "name": "x" }).is_err());
    }

    #[test]
    fn test_null_fields_round_trip_as_null() {
        let fields = match json!({ "imageUrl": null, "productIds": ["a"] }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let mut raw = bson::to_document(&fields).unwrap();
        raw.insert("_id", "p1");

        let document = into_document(raw).unwrap();
        assert_eq!(document.data["imageUrl"], Value::Null);
        assert_eq!(document.data["productIds"], json!(["a"]));
    }
}
