use tracing::instrument;

use super::{CatalogService, name_conflict, required};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CreateSupplier, DeleteById, NewSupplier, Supplier, SupplierIdQuery, UpdateSupplier,
};
use crate::store::{Collection, DocumentStore, to_fields};

const ID_REQUIRED: &str = "ID requerido";
const NAME_REQUIRED: &str = "Nombre de proveedor requerido";

impl<S: DocumentStore> CatalogService<S> {
    /// Create a supplier with a unique name and return its id.
    ///
    /// Every id in `productIds` must reference an existing product.
    #[instrument(skip(self, input), fields(supplier_name = ?input.name))]
    pub async fn create_supplier(&self, input: CreateSupplier) -> CatalogResult<String> {
        let name = required(input.name, NAME_REQUIRED)?;

        if self.name_taken(Collection::Suppliers, &name).await? {
            return Err(CatalogError::SupplierExists);
        }

        let product_ids = input.product_ids.unwrap_or_default();
        self.ensure_products_exist(product_ids.iter()).await?;

        let supplier = NewSupplier {
            name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            product_ids,
        };
        let id = self
            .store
            .insert(Collection::Suppliers, to_fields(&supplier)?)
            .await
            .map_err(name_conflict(CatalogError::SupplierExists))?;
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn get_suppliers(&self) -> CatalogResult<Vec<Supplier>> {
        self.store
            .list(Collection::Suppliers)
            .await?
            .into_iter()
            .map(|doc| doc.decode().map_err(CatalogError::from))
            .collect()
    }

    #[instrument(skip(self))]
    pub async fn get_supplier_by_id(&self, query: SupplierIdQuery) -> CatalogResult<Supplier> {
        let id = required(query.id, ID_REQUIRED)?;
        self.find_supplier(&id).await
    }

    /// Overwrite the given fields of an existing supplier.
    ///
    /// A new name must not belong to another supplier; a new `productIds`
    /// replaces the list and must only reference existing products.
    #[instrument(skip(self, input), fields(supplier_id = ?input.id))]
    pub async fn update_supplier(&self, input: UpdateSupplier) -> CatalogResult<()> {
        let id = required(input.id.clone(), ID_REQUIRED)?;
        let existing = self.find_supplier(&id).await?;

        if let Some(name) = input.name.as_deref() {
            if name.is_empty() {
                return Err(CatalogError::InvalidInput(NAME_REQUIRED));
            }
            if name != existing.name && self.name_taken(Collection::Suppliers, name).await? {
                return Err(CatalogError::SupplierExists);
            }
        }

        if let Some(product_ids) = &input.product_ids {
            self.ensure_products_exist(product_ids.iter()).await?;
        }

        self.store
            .update(Collection::Suppliers, &id, to_fields(&input)?)
            .await
            .map_err(name_conflict(CatalogError::SupplierExists))?;
        Ok(())
    }

    #[instrument(skip(self, input), fields(supplier_id = ?input.id))]
    pub async fn delete_supplier(&self, input: DeleteById) -> CatalogResult<()> {
        let id = required(input.id, ID_REQUIRED)?;

        if self.store.get(Collection::Suppliers, &id).await?.is_none() {
            return Err(CatalogError::SupplierNotFound);
        }

        self.store.delete(Collection::Suppliers, &id).await?;
        Ok(())
    }
}
