use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::product_ids::ProductIdSet;

// ============================================================================
// Documents
// ============================================================================

/// Product category, referenced by name from products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Product document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Name of the category the product was created under
    pub category: String,
    #[serde(default)]
    pub stock: Option<i64>,
}

/// Supplier document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub product_ids: ProductIdSet,
}

/// Stored fields of a new category
#[derive(Debug, Serialize)]
pub(crate) struct NewCategory {
    pub name: String,
}

/// Stored fields of a new product; absent values are stored as `null`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: String,
    pub stock: Option<i64>,
}

/// Stored fields of a new supplier
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewSupplier {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub product_ids: ProductIdSet,
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `createCategory`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub name: Option<String>,
}

/// Body of `createProduct`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    /// Must name an existing category
    pub category: Option<String>,
    pub stock: Option<i64>,
}

/// Body of `updateProduct`: the id plus the fields to overwrite.
///
/// Fields left out are not touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

/// Body of `deleteProduct` and `deleteSupplier`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DeleteById {
    pub id: Option<String>,
}

/// Body of `increaseStock`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct IncreaseStock {
    pub id: Option<String>,
    /// Units to add, must be greater than 0
    pub quantity: Option<i64>,
}

/// Body of `createSupplier`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplier {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Existing product ids, without repetitions
    pub product_ids: Option<ProductIdSet>,
}

/// Body of `updateSupplier`: the id plus the fields to overwrite
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplier {
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Replaces the whole list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<ProductIdSet>,
}

/// Query string of `getSupplierById`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SupplierIdQuery {
    /// Supplier id
    pub id: Option<String>,
}

/// Body of `addProductToSupplier` and `removeProductFromSupplier`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProduct {
    pub supplier_id: Option<String>,
    pub product_id: Option<String>,
}

/// Body of `addMultipleProductsToSupplier` and
/// `removeMultipleProductsFromSupplier`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProducts {
    pub supplier_id: Option<String>,
    /// Non-empty list of product ids
    pub product_ids: Option<Vec<String>>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of `increaseStock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    pub message: String,
    pub previous_stock: i64,
    pub new_stock: i64,
}

/// Result of `addMultipleProductsToSupplier`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProductsReport {
    pub message: String,
    pub newly_added: usize,
    pub already_assigned: usize,
    pub total_products: usize,
}

/// Result of `removeMultipleProductsFromSupplier`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveProductsReport {
    pub message: String,
    pub removed: usize,
    pub not_assigned: usize,
    pub total_products: usize,
}

/// Treat an empty string like a missing field.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_fields;
    use serde_json::json;

    #[test]
    fn test_new_product_stores_absent_fields_as_null() {
        let product = NewProduct {
            name: Some("Agua".to_string()),
            description: None,
            price: None,
            image_url: None,
            category: "Bebidas".to_string(),
            stock: Some(3),
        };
        let fields = to_fields(&product).unwrap();
        assert_eq!(fields["imageUrl"], json!(null));
        assert_eq!(fields["category"], json!("Bebidas"));
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_update_product_serializes_only_given_fields() {
        let update: UpdateProduct =
            serde_json::from_value(json!({ "id": "p1", "price": 9.5, "imageUrl": "x.png" }))
                .unwrap();
        assert_eq!(update.id.as_deref(), Some("p1"));

        let fields = to_fields(&update).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["price"], json!(9.5));
        assert_eq!(fields["imageUrl"], json!("x.png"));
        assert!(!fields.contains_key("id"));
    }

    #[test]
    fn test_product_decodes_null_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": "p1",
            "name": null,
            "category": "Bebidas",
            "stock": null
        }))
        .unwrap();
        assert_eq!(product.name, None);
        assert_eq!(product.stock, None);
    }

    #[test]
    fn test_supplier_rejects_duplicate_product_ids() {
        let result: Result<CreateSupplier, _> =
            serde_json::from_value(json!({ "name": "ACME", "productIds": ["a", "a"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
