use std::sync::Arc;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::product::errors::{EntityKind, ProductError};
use crate::domain::supplier::repository::SupplierRepository;

/// Checks that the category and supplier a product points at exist.
///
/// The answer is only advisory: either row may be deleted before the write
/// commits. `ProductCommitter` catches that case from the store's constraint.
#[derive(Clone)]
pub struct ReferenceGate {
    pub categories: Arc<dyn CategoryRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
}

impl ReferenceGate {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        suppliers: Arc<dyn SupplierRepository>,
    ) -> Self {
        Self {
            categories,
            suppliers,
        }
    }

    pub async fn validate_references(
        &self,
        category_id: i64,
        supplier_id: i64,
    ) -> Result<(), ProductError> {
        self.categories
            .get_by_id(category_id)
            .await
            .map_err(|e| lookup_error(e, EntityKind::Category, category_id))?;

        self.suppliers
            .get_by_id(supplier_id)
            .await
            .map_err(|e| lookup_error(e, EntityKind::Supplier, supplier_id))?;

        Ok(())
    }
}

fn lookup_error(err: RepositoryError, entity: EntityKind, id: i64) -> ProductError {
    match err {
        RepositoryError::NotFound => ProductError::not_found(entity, id),
        other => ProductError::Repository(other),
    }
}
