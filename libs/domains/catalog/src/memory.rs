//! In-memory implementation of DocumentStore, used by handler tests and
//! local runs without a database.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::store::{Collection, Document, DocumentStore, StoreError, StoreResult};

/// Documents kept per collection in insertion order.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: Value,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.data.get(field) == Some(&value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    #[instrument(skip(self, data))]
    async fn insert(&self, collection: Collection, data: Map<String, Value>) -> StoreResult<String> {
        let id = Uuid::now_v7().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .push(Document::new(id.clone(), data));

        tracing::debug!(%collection, %id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self, data))]
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })?;
        doc.data.extend(data);

        tracing::debug!(%collection, %id, "Document updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(&collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_insert_get_and_list() {
        let store = InMemoryDocumentStore::new();
        let a = store
            .insert(Collection::Categories, fields(json!({ "name": "A" })))
            .await
            .unwrap();
        let b = store
            .insert(Collection::Categories, fields(json!({ "name": "B" })))
            .await
            .unwrap();
        assert_ne!(a, b);

        let doc = store.get(Collection::Categories, &a).await.unwrap().unwrap();
        assert_eq!(doc.data["name"], "A");

        let ids: Vec<_> = store
            .list(Collection::Categories)
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc.id)
            .collect();
        assert_eq!(ids, vec![a, b]);

        assert!(store.list(Collection::Products).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_field_uses_equality() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(Collection::Categories, fields(json!({ "name": "Bebidas" })))
            .await
            .unwrap();

        let found = store
            .find_by_field(Collection::Categories, "name", json!("Bebidas"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let found = store
            .find_by_field(Collection::Categories, "name", json!("bebidas"))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = InMemoryDocumentStore::new();
        let id = store
            .insert(Collection::Products, fields(json!({ "name": "Agua", "stock": 1 })))
            .await
            .unwrap();

        store
            .update(Collection::Products, &id, fields(json!({ "stock": 5 })))
            .await
            .unwrap();

        let doc = store.get(Collection::Products, &id).await.unwrap().unwrap();
        assert_eq!(doc.data["name"], "Agua");
        assert_eq!(doc.data["stock"], 5);
    }

    #[tokio::test]
    async fn test_update_missing_document_fails() {
        let store = InMemoryDocumentStore::new();
        let result = store
            .update(Collection::Products, "missing", fields(json!({ "stock": 5 })))
            .await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        let id = store
            .insert(Collection::Products, fields(json!({ "name": "Agua" })))
            .await
            .unwrap();

        store.delete(Collection::Products, &id).await.unwrap();
        store.delete(Collection::Products, &id).await.unwrap();
        assert!(store.get(Collection::Products, &id).await.unwrap().is_none());
    }
}
