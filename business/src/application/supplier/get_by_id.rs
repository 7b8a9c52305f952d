use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::get_by_id::{
    GetSupplierByIdParams, GetSupplierByIdUseCase,
};

pub struct GetSupplierByIdUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSupplierByIdUseCase for GetSupplierByIdUseCaseImpl {
    async fn execute(&self, params: GetSupplierByIdParams) -> Result<Supplier, SupplierError> {
        self.logger
            .debug(&format!("Fetching supplier: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SupplierError::NotFound(params.id),
                other => SupplierError::Repository(other),
            })
    }
}
