use async_trait::async_trait;

use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;

/// Only the fields that are `Some` are written.
pub struct UpdateSupplierParams {
    pub id: i64,
    pub name: Option<String>,
    pub cnpj: Option<String>,
    pub address: Option<String>,
}

#[async_trait]
pub trait UpdateSupplierUseCase: Send + Sync {
    async fn execute(&self, params: UpdateSupplierParams) -> Result<Supplier, SupplierError>;
}
