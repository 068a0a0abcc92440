use serde_json::{Map, Value};
use tracing::instrument;

use super::{CatalogService, required};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CreateProduct, DeleteById, IncreaseStock, NewProduct, Product, StockResponse, UpdateProduct,
};
use crate::store::{Collection, DocumentStore, to_fields};

const ID_REQUIRED: &str = "ID requerido";

impl<S: DocumentStore> CatalogService<S> {
    /// Create a product under an existing category and return its id.
    ///
    /// Product names are not unique.
    #[instrument(skip(self, input), fields(category = ?input.category))]
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<String> {
        let category = required(input.category, "Categoría requerida")?;

        if !self.name_taken(Collection::Categories, &category).await? {
            return Err(CatalogError::CategoryNotFound);
        }

        let product = NewProduct {
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
            category,
            stock: input.stock,
        };
        let id = self
            .store
            .insert(Collection::Products, to_fields(&product)?)
            .await?;
        Ok(id)
    }

    /// All products, unpaginated
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> CatalogResult<Vec<Product>> {
        self.store
            .list(Collection::Products)
            .await?
            .into_iter()
            .map(|doc| doc.decode().map_err(CatalogError::from))
            .collect()
    }

    /// Overwrite the given fields of a product.
    ///
    /// A missing product is a store failure, not a [`CatalogError::ProductNotFound`].
    #[instrument(skip(self, input), fields(product_id = ?input.id))]
    pub async fn update_product(&self, input: UpdateProduct) -> CatalogResult<()> {
        let id = required(input.id.clone(), ID_REQUIRED)?;
        let fields = to_fields(&input)?;

        self.store.update(Collection::Products, &id, fields).await?;
        Ok(())
    }

    /// Delete a product; deleting an unknown id succeeds
    #[instrument(skip(self, input), fields(product_id = ?input.id))]
    pub async fn delete_product(&self, input: DeleteById) -> CatalogResult<()> {
        let id = required(input.id, ID_REQUIRED)?;
        self.store.delete(Collection::Products, &id).await?;
        Ok(())
    }

    /// Add `quantity` units to a product's stock; a missing stock counts as 0.
    #[instrument(skip(self, input), fields(product_id = ?input.id, quantity = ?input.quantity))]
    pub async fn increase_stock(&self, input: IncreaseStock) -> CatalogResult<StockResponse> {
        let id = required(input.id, ID_REQUIRED)?;
        let quantity = match input.quantity {
            Some(quantity) if quantity > 0 => quantity,
            _ => return Err(CatalogError::InvalidInput("Cantidad debe ser mayor a 0")),
        };

        let product = self
            .store
            .get(Collection::Products, &id)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

        let previous_stock = product
            .data
            .get("stock")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        let new_stock = previous_stock
            .checked_add(quantity)
            .ok_or(CatalogError::InvalidInput("Cantidad fuera de rango"))?;

        let mut fields = Map::new();
        fields.insert("stock".to_string(), Value::from(new_stock));
        self.store.update(Collection::Products, &id, fields).await?;

        tracing::info!(product_id = %id, previous_stock, new_stock, "Stock increased");
        Ok(StockResponse {
            message: "Stock actualizado".to_string(),
            previous_stock,
            new_stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, MockDocumentStore, StoreError};
    use mockall::predicate::eq;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_create_product_requires_category() {
        let service = CatalogService::new(MockDocumentStore::new());
        let err = service
            .create_product(CreateProduct {
                name: Some("Agua".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput("Categoría requerida")));
    }

    #[tokio::test]
    async fn test_create_product_with_unknown_category() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_by_field()
            .with(eq(Collection::Categories), eq("name"), eq(json!("Nada")))
            .returning(|_, _, _| Ok(vec![]));
        store.expect_insert().never();

        let service = CatalogService::new(store);
        let err = service
            .create_product(CreateProduct {
                category: Some("Nada".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_create_product_stores_every_field() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_by_field()
            .returning(|_, _, _| Ok(vec![Document::new("c1", fields(json!({ "name": "Bebidas" })))]));
        store
            .expect_insert()
            .withf(|collection, data| {
                *collection == Collection::Products
                    && data.len() == 6
                    && data["description"].is_null()
                    && data["price"] == json!(1.5)
            })
            .returning(|_, _| Ok("p1".to_string()));

        let service = CatalogService::new(store);
        let id = service
            .create_product(CreateProduct {
                name: Some("Agua".to_string()),
                price: Some(1.5),
                category: Some("Bebidas".to_string()),
                stock: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(id, "p1");
    }

    #[tokio::test]
    async fn test_update_product_missing_document_is_a_store_error() {
        let mut store = MockDocumentStore::new();
        store
            .expect_update()
            .withf(|collection, id, data| {
                *collection == Collection::Products && id == "p1" && data["stock"] == json!(-2)
            })
            .returning(|collection, id, _| {
                Err(StoreError::NotFound {
                    collection,
                    id: id.to_string(),
                })
            });

        let service = CatalogService::new(store);
        let err = service
            .update_product(UpdateProduct {
                id: Some("p1".to_string()),
                stock: Some(-2),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Store(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_product_requires_id() {
        let service = CatalogService::new(MockDocumentStore::new());
        let err = service
            .delete_product(DeleteById { id: None })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(ID_REQUIRED)));
    }

    #[tokio::test]
    async fn test_increase_stock_rejects_non_positive_quantity() {
        let service = CatalogService::new(MockDocumentStore::new());

        for quantity in [None, Some(0), Some(-3)] {
            let err = service
                .increase_stock(IncreaseStock {
                    id: Some("p1".to_string()),
                    quantity,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, CatalogError::InvalidInput("Cantidad debe ser mayor a 0")));
        }
    }

    #[tokio::test]
    async fn test_increase_stock_checks_id_before_quantity() {
        let service = CatalogService::new(MockDocumentStore::new());
        let err = service
            .increase_stock(IncreaseStock {
                id: None,
                quantity: Some(0),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(ID_REQUIRED)));
    }

    #[tokio::test]
    async fn test_increase_stock_missing_product() {
        let mut store = MockDocumentStore::new();
        store.expect_get().returning(|_, _| Ok(None));
        store.expect_update().never();

        let service = CatalogService::new(store);
        let err = service
            .increase_stock(IncreaseStock {
                id: Some("p1".to_string()),
                quantity: Some(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_increase_stock_treats_null_stock_as_zero() {
        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .with(eq(Collection::Products), eq("p1"))
            .returning(|_, _| {
                Ok(Some(Document::new(
                    "p1",
                    fields(json!({ "category": "Bebidas", "stock": null })),
                )))
            });
        store
            .expect_update()
            .withf(|_, id, data| id == "p1" && data.len() == 1 && data["stock"] == json!(4))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = CatalogService::new(store);
        let response = service
            .increase_stock(IncreaseStock {
                id: Some("p1".to_string()),
                quantity: Some(4),
            })
            .await
            .unwrap();
        assert_eq!(response.previous_stock, 0);
        assert_eq!(response.new_stock, 4);
        assert_eq!(response.message, "Stock actualizado");
    }
}
