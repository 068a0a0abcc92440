//! Supplier-product association.
//!
//! A supplier's `productIds` behaves as an ordered set: adding an id already
//! present and removing an absent one are successful no-ops that skip the
//! write.

use serde_json::{Map, Value};
use tracing::instrument;

use super::{CatalogService, required};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    AddProductsReport, MessageResponse, RemoveProductsReport, Supplier, SupplierProduct,
    SupplierProducts,
};
use crate::product_ids::ProductIdSet;
use crate::store::{Collection, DocumentStore};

const SUPPLIER_ID_REQUIRED: &str = "ID de proveedor requerido";
const PRODUCT_ID_REQUIRED: &str = "ID de producto requerido";
const PRODUCT_IDS_REQUIRED: &str = "Lista de productos requerida";

impl<S: DocumentStore> CatalogService<S> {
    #[instrument(skip(self, input), fields(supplier_id = ?input.supplier_id, product_id = ?input.product_id))]
    pub async fn add_product_to_supplier(
        &self,
        input: SupplierProduct,
    ) -> CatalogResult<MessageResponse> {
        let supplier_id = required(input.supplier_id, SUPPLIER_ID_REQUIRED)?;
        let product_id = required(input.product_id, PRODUCT_ID_REQUIRED)?;

        let mut supplier = self.find_supplier(&supplier_id).await?;
        if !self.product_exists(&product_id).await? {
            return Err(CatalogError::ProductNotFound);
        }

        if !supplier.product_ids.insert(product_id) {
            return Ok(MessageResponse::new(
                "El producto ya está asignado al proveedor",
            ));
        }

        self.save_product_ids(&supplier).await?;
        Ok(MessageResponse::new("Producto asignado al proveedor"))
    }

    /// Product existence is not checked: a dangling id can still be removed.
    #[instrument(skip(self, input), fields(supplier_id = ?input.supplier_id, product_id = ?input.product_id))]
    pub async fn remove_product_from_supplier(
        &self,
        input: SupplierProduct,
    ) -> CatalogResult<MessageResponse> {
        let supplier_id = required(input.supplier_id, SUPPLIER_ID_REQUIRED)?;
        let product_id = required(input.product_id, PRODUCT_ID_REQUIRED)?;

        let mut supplier = self.find_supplier(&supplier_id).await?;
        if !supplier.product_ids.remove(&product_id) {
            return Ok(MessageResponse::new(
                "El producto no está asignado al proveedor",
            ));
        }

        self.save_product_ids(&supplier).await?;
        Ok(MessageResponse::new("Producto removido del proveedor"))
    }

    /// Append every requested product not yet assigned.
    ///
    /// Fails without writing if any requested product does not exist.
    /// Repeated ids in the request count once.
    #[instrument(skip(self, input), fields(supplier_id = ?input.supplier_id))]
    pub async fn add_multiple_products_to_supplier(
        &self,
        input: SupplierProducts,
    ) -> CatalogResult<AddProductsReport> {
        let (supplier_id, requested) = required_list(input)?;

        let mut supplier = self.find_supplier(&supplier_id).await?;
        self.ensure_products_exist(requested.iter()).await?;

        let new_ids = supplier.product_ids.missing_from(requested.iter());
        let already_assigned = requested.len() - new_ids.len();

        if new_ids.is_empty() {
            return Ok(AddProductsReport {
                message: "Todos los productos ya estaban asignados al proveedor".to_string(),
                newly_added: 0,
                already_assigned,
                total_products: supplier.product_ids.len(),
            });
        }

        let newly_added = supplier.product_ids.extend(new_ids);
        self.save_product_ids(&supplier).await?;

        Ok(AddProductsReport {
            message: "Productos asignados al proveedor".to_string(),
            newly_added,
            already_assigned,
            total_products: supplier.product_ids.len(),
        })
    }

    /// Remove the requested products that are assigned; the rest are reported
    /// as not assigned.
    #[instrument(skip(self, input), fields(supplier_id = ?input.supplier_id))]
    pub async fn remove_multiple_products_from_supplier(
        &self,
        input: SupplierProducts,
    ) -> CatalogResult<RemoveProductsReport> {
        let (supplier_id, requested) = required_list(input)?;

        let mut supplier = self.find_supplier(&supplier_id).await?;
        let removed = supplier.product_ids.remove_all(requested.iter());
        let not_assigned = requested.len() - removed;

        if removed == 0 {
            return Ok(RemoveProductsReport {
                message: "Ningún producto estaba asignado al proveedor".to_string(),
                removed,
                not_assigned,
                total_products: supplier.product_ids.len(),
            });
        }

        self.save_product_ids(&supplier).await?;

        Ok(RemoveProductsReport {
            message: "Productos removidos del proveedor".to_string(),
            removed,
            not_assigned,
            total_products: supplier.product_ids.len(),
        })
    }

    async fn save_product_ids(&self, supplier: &Supplier) -> CatalogResult<()> {
        let mut fields = Map::new();
        fields.insert(
            "productIds".to_string(),
            Value::from(supplier.product_ids.as_slice().to_vec()),
        );
        self.store
            .update(Collection::Suppliers, &supplier.id, fields)
            .await?;

        tracing::info!(
            supplier_id = %supplier.id,
            total_products = supplier.product_ids.len(),
            "Supplier products updated"
        );
        Ok(())
    }
}

fn required_list(input: SupplierProducts) -> CatalogResult<(String, ProductIdSet)> {
    let supplier_id = required(input.supplier_id, SUPPLIER_ID_REQUIRED)?;
    let requested: ProductIdSet = input.product_ids.unwrap_or_default().into_iter().collect();
    if requested.is_empty() {
        return Err(CatalogError::InvalidInput(PRODUCT_IDS_REQUIRED));
    }
    Ok((supplier_id, requested))
}
