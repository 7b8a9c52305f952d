use async_trait::async_trait;

use crate::domain::supplier::errors::SupplierError;

pub struct DeleteSupplierParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteSupplierUseCase: Send + Sync {
    async fn execute(&self, params: DeleteSupplierParams) -> Result<(), SupplierError>;
}
