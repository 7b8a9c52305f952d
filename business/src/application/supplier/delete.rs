use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::delete::{DeleteSupplierParams, DeleteSupplierUseCase};

pub struct DeleteSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteSupplierUseCase for DeleteSupplierUseCaseImpl {
    async fn execute(&self, params: DeleteSupplierParams) -> Result<(), SupplierError> {
        self.logger
            .info(&format!("Deleting supplier: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SupplierError::NotFound(params.id),
                RepositoryError::ForeignKeyViolation => SupplierError::InUse,
                other => SupplierError::Repository(other),
            })?;

        self.logger
            .info(&format!("Supplier deleted: {}", params.id));
        Ok(())
    }
}
