use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::get_all::GetAllSuppliersUseCase;

pub struct GetAllSuppliersUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllSuppliersUseCase for GetAllSuppliersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Supplier>, SupplierError> {
        self.logger.debug("Listing suppliers");
        Ok(self.repository.get_all().await?)
    }
}
