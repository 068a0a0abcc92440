use tracing::instrument;

use super::{CatalogService, name_conflict, required};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateCategory, NewCategory};
use crate::store::{Collection, DocumentStore, to_fields};

impl<S: DocumentStore> CatalogService<S> {
    /// Create a category with a unique name and return its id
    #[instrument(skip(self, input), fields(category_name = ?input.name))]
    pub async fn create_category(&self, input: CreateCategory) -> CatalogResult<String> {
        let name = required(input.name, "Nombre de categoría requerido")?;

        if self.name_taken(Collection::Categories, &name).await? {
            return Err(CatalogError::CategoryExists);
        }

        let id = self
            .store
            .insert(Collection::Categories, to_fields(&NewCategory { name })?)
            .await
            .map_err(name_conflict(CatalogError::CategoryExists))?;
        Ok(id)
    }
}
