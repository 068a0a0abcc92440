//! Integration tests for the MongoDB document store
//!
//! These tests use a real MongoDB via testcontainers to ensure:
//! - Documents round-trip with string ids
//! - Partial updates merge into the stored document
//! - Unique name indexes reject duplicates
//! - The functions behave the same as on the in-memory store

use domain_catalog::store::to_fields;
use domain_catalog::*;
use serde_json::json;
use test_utils::{TestDataBuilder, TestMongo, assertions::*};

async fn store(mongo: &TestMongo, test_name: &str) -> MongoDocumentStore {
    let builder = TestDataBuilder::from_test_name(test_name);
    let store = MongoDocumentStore::new(mongo.database(&builder.database_name()));
    store.init_indexes().await.unwrap();
    store
}

// ============================================================================
// Store Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_insert_get_update_delete() {
    let mongo = TestMongo::new().await;
    let store = store(&mongo, "insert_get_update_delete").await;

    let data = to_fields(&json!({ "name": "Agua", "category": "Bebidas", "stock": 3 })).unwrap();
    let id = store.insert(Collection::Products, data).await.unwrap();

    let document = store.get(Collection::Products, &id).await.unwrap();
    let document = assert_some(document, "product should exist");
    assert_eq!(document.id, id);
    assert_eq!(document.data["name"], json!("Agua"));
    assert_eq!(document.data["stock"], json!(3));

    let patch = to_fields(&json!({ "stock": 8, "price": 2.5 })).unwrap();
    store.update(Collection::Products, &id, patch).await.unwrap();

    let product: Product = assert_some(
        store.get(Collection::Products, &id).await.unwrap(),
        "product should still exist",
    )
    .decode()
    .unwrap();
    assert_eq!(product.name.as_deref(), Some("Agua"));
    assert_eq!(product.stock, Some(8));
    assert_eq!(product.price, Some(2.5));

    store.delete(Collection::Products, &id).await.unwrap();
    assert!(store.get(Collection::Products, &id).await.unwrap().is_none());

    // Deleting again is not an error
    store.delete(Collection::Products, &id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_missing_document() {
    let mongo = TestMongo::new().await;
    let store = store(&mongo, "update_missing_document").await;

    let patch = to_fields(&json!({ "stock": 1 })).unwrap();
    let result = store.update(Collection::Products, "missing", patch).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));

    // An empty patch still reports the missing document
    let result = store
        .update(Collection::Products, "missing", Default::default())
        .await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_by_field() {
    let mongo = TestMongo::new().await;
    let store = store(&mongo, "find_by_field").await;
    let builder = TestDataBuilder::from_test_name("find_by_field");

    let name = builder.name("category", "main");
    let data = to_fields(&json!({ "name": name })).unwrap();
    let id = store.insert(Collection::Categories, data).await.unwrap();

    let found = store
        .find_by_field(Collection::Categories, "name", json!(name))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);

    let found = store
        .find_by_field(Collection::Categories, "name", json!("other"))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unique_name_index() {
    let mongo = TestMongo::new().await;
    let store = store(&mongo, "unique_name_index").await;
    let builder = TestDataBuilder::from_test_name("unique_name_index");

    let data = to_fields(&json!({ "name": builder.name("supplier", "dup") })).unwrap();
    store.insert(Collection::Suppliers, data.clone()).await.unwrap();

    let result = store.insert(Collection::Suppliers, data).await;
    assert!(matches!(result, Err(StoreError::Duplicate(_))));

    // init_indexes is idempotent
    store.init_indexes().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_rename_onto_taken_name_is_duplicate() {
    let mongo = TestMongo::new().await;
    let store = store(&mongo, "rename_onto_taken_name").await;
    let builder = TestDataBuilder::from_test_name("rename_onto_taken_name");

    let taken = builder.name("category", "taken");
    let data = to_fields(&json!({ "name": taken })).unwrap();
    store.insert(Collection::Categories, data).await.unwrap();

    let data = to_fields(&json!({ "name": builder.name("category", "other") })).unwrap();
    let id = store.insert(Collection::Categories, data).await.unwrap();

    let patch = to_fields(&json!({ "name": taken })).unwrap();
    let result = store.update(Collection::Categories, &id, patch).await;
    assert!(matches!(result, Err(StoreError::Duplicate(_))));

    // A free name is still accepted
    let patch = to_fields(&json!({ "name": builder.name("category", "free") })).unwrap();
    store.update(Collection::Categories, &id, patch).await.unwrap();
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_supplier_products_on_mongo() {
    let mongo = TestMongo::new().await;
    let service = CatalogService::new(store(&mongo, "supplier_products_on_mongo").await);
    let builder = TestDataBuilder::from_test_name("supplier_products_on_mongo");

    let category = builder.name("category", "main");
    service
        .create_category(CreateCategory {
            name: Some(category.clone()),
        })
        .await
        .unwrap();

    let mut products = Vec::new();
    for suffix in ["a", "b", "c"] {
        let id = service
            .create_product(CreateProduct {
                name: Some(builder.name("product", suffix)),
                category: Some(category.clone()),
                stock: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        products.push(id);
    }

    let supplier = service
        .create_supplier(CreateSupplier {
            name: Some(builder.name("supplier", "main")),
            ..Default::default()
        })
        .await
        .unwrap();

    let report = service
        .add_multiple_products_to_supplier(SupplierProducts {
            supplier_id: Some(supplier.clone()),
            product_ids: Some(products.clone()),
        })
        .await
        .unwrap();
    assert_eq!(report.newly_added, 3);
    assert_eq!(report.total_products, 3);

    let report = service
        .remove_multiple_products_from_supplier(SupplierProducts {
            supplier_id: Some(supplier.clone()),
            product_ids: Some(vec![products[1].clone(), "ghost".to_string()]),
        })
        .await
        .unwrap();
    assert_eq!(report.removed, 1);
    assert_eq!(report.not_assigned, 1);

    let stored = service
        .get_supplier_by_id(SupplierIdQuery {
            id: Some(supplier),
        })
        .await
        .unwrap();
    let remaining: Vec<String> = stored.product_ids.into();
    assert_eq!(remaining, vec![products[0].clone(), products[2].clone()]);

    let stock = service
        .increase_stock(IncreaseStock {
            id: Some(products[0].clone()),
            quantity: Some(4),
        })
        .await
        .unwrap();
    assert_eq!(stock.previous_stock, 1);
    assert_eq!(stock.new_stock, 5);
}
