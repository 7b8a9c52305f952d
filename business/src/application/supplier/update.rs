use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::update::{UpdateSupplierParams, UpdateSupplierUseCase};

pub struct UpdateSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSupplierUseCase for UpdateSupplierUseCaseImpl {
    async fn execute(&self, params: UpdateSupplierParams) -> Result<Supplier, SupplierError> {
        self.logger
            .info(&format!("Updating supplier: {}", params.id));

        let id = params.id;
        let map_error = move |e: RepositoryError| match e {
            RepositoryError::NotFound => SupplierError::NotFound(id),
            RepositoryError::Duplicated => SupplierError::DuplicatedCnpj,
            other => SupplierError::Repository(other),
        };

        let existing = self.repository.get_by_id(id).await.map_err(map_error)?;

        let merged = Supplier {
            id: existing.id,
            name: params.name.unwrap_or(existing.name),
            cnpj: params.cnpj.unwrap_or(existing.cnpj),
            address: params.address.unwrap_or(existing.address),
        };
        merged.validate()?;

        let stored = self.repository.update(&merged).await.map_err(map_error)?;

        self.logger
            .info(&format!("Supplier updated: {}", stored.id));
        Ok(stored)
    }
}
