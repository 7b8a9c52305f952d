use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::{NewSupplier, NewSupplierProps, Supplier};
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::create::{CreateSupplierParams, CreateSupplierUseCase};

pub struct CreateSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateSupplierUseCase for CreateSupplierUseCaseImpl {
    async fn execute(&self, params: CreateSupplierParams) -> Result<Supplier, SupplierError> {
        self.logger
            .info(&format!("Creating supplier: {}", params.name));

        let supplier = NewSupplier::new(NewSupplierProps {
            name: params.name,
            cnpj: params.cnpj,
            address: params.address,
        })?;

        let stored = self
            .repository
            .insert(&supplier)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => SupplierError::DuplicatedCnpj,
                other => SupplierError::Repository(other),
            })?;

        self.logger
            .info(&format!("Supplier created with id: {}", stored.id));
        Ok(stored)
    }
}
