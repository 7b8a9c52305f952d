use async_trait::async_trait;

use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;

pub struct GetSupplierByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetSupplierByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetSupplierByIdParams) -> Result<Supplier, SupplierError>;
}
